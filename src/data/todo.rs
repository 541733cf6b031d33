//! Todo data repository.
//!
//! Reads, updates and deletes are all scoped by `(id, member_id)`; ownership is
//! enforced by the lookup predicate itself rather than by a separate check
//! after a member-agnostic fetch.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::todo::{CreateTodoParams, Todo, TodoDate, UpdateTodoParams};

pub struct TodoRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TodoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new todo row.
    ///
    /// New todos start uncompleted and unfavorited; both flags are toggled
    /// through update.
    ///
    /// # Arguments
    /// - `params` - Owner, optional category, content and target date
    ///
    /// # Returns
    /// - `Ok(Todo)` - The created todo with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateTodoParams) -> Result<Todo, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::todo::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            category_id: ActiveValue::Set(params.category_id),
            todo_content: ActiveValue::Set(params.content),
            todo_year: ActiveValue::Set(params.date.year),
            todo_month: ActiveValue::Set(params.date.month),
            todo_day: ActiveValue::Set(params.date.day),
            is_completed: ActiveValue::Set(false),
            is_favorite: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Todo::from_entity(entity))
    }

    /// Finds a todo scoped by `(todo_id, member_id)`.
    ///
    /// A todo owned by a different member resolves to `None`, the same result
    /// as a todo that does not exist at all.
    pub async fn find_by_id_and_member(
        &self,
        todo_id: i64,
        member_id: i64,
    ) -> Result<Option<Todo>, DbErr> {
        let entity = entity::prelude::Todo::find_by_id(todo_id)
            .filter(entity::todo::Column::MemberId.eq(member_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Todo::from_entity))
    }

    /// Returns all todos owned by a member, oldest first.
    pub async fn find_all_by_member(&self, member_id: i64) -> Result<Vec<Todo>, DbErr> {
        let entities = entity::prelude::Todo::find()
            .filter(entity::todo::Column::MemberId.eq(member_id))
            .order_by_asc(entity::todo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Todo::from_entity).collect())
    }

    /// Returns a member's todos for one calendar date.
    pub async fn find_by_member_and_date(
        &self,
        member_id: i64,
        date: &TodoDate,
    ) -> Result<Vec<Todo>, DbErr> {
        let entities = entity::prelude::Todo::find()
            .filter(entity::todo::Column::MemberId.eq(member_id))
            .filter(entity::todo::Column::TodoYear.eq(date.year))
            .filter(entity::todo::Column::TodoMonth.eq(date.month))
            .filter(entity::todo::Column::TodoDay.eq(date.day))
            .order_by_asc(entity::todo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Todo::from_entity).collect())
    }

    /// Returns a member's todos for one calendar date within one category.
    pub async fn find_by_member_category_and_date(
        &self,
        member_id: i64,
        category_id: i64,
        date: &TodoDate,
    ) -> Result<Vec<Todo>, DbErr> {
        let entities = entity::prelude::Todo::find()
            .filter(entity::todo::Column::MemberId.eq(member_id))
            .filter(entity::todo::Column::CategoryId.eq(category_id))
            .filter(entity::todo::Column::TodoYear.eq(date.year))
            .filter(entity::todo::Column::TodoMonth.eq(date.month))
            .filter(entity::todo::Column::TodoDay.eq(date.day))
            .order_by_asc(entity::todo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Todo::from_entity).collect())
    }

    /// Applies all mutable fields onto an existing todo via an explicit update.
    ///
    /// The row is first resolved through the `(todo_id, member_id)` scoped
    /// predicate; the write is an explicit update call, not an implicit flush.
    ///
    /// # Returns
    /// - `Ok(Some(Todo))` - Updated todo
    /// - `Ok(None)` - No todo with that id owned by the member
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(&self, params: UpdateTodoParams) -> Result<Option<Todo>, DbErr> {
        let Some(model) = entity::prelude::Todo::find_by_id(params.todo_id)
            .filter(entity::todo::Column::MemberId.eq(params.member_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::todo::ActiveModel = model.into();
        active.category_id = ActiveValue::Set(params.category_id);
        active.todo_content = ActiveValue::Set(params.content);
        active.todo_year = ActiveValue::Set(params.date.year);
        active.todo_month = ActiveValue::Set(params.date.month);
        active.todo_day = ActiveValue::Set(params.date.day);
        active.is_completed = ActiveValue::Set(params.is_completed);
        active.is_favorite = ActiveValue::Set(params.is_favorite);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let updated = active.update(self.db).await?;

        Ok(Some(Todo::from_entity(updated)))
    }

    /// Deletes a todo scoped by `(todo_id, member_id)`.
    ///
    /// Deletion uses the same member-scoped predicate as reads, so a todo id
    /// belonging to another member deletes nothing.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No todo with that id owned by the member
    pub async fn delete_by_id_and_member(
        &self,
        todo_id: i64,
        member_id: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Todo::delete_many()
            .filter(entity::todo::Column::Id.eq(todo_id))
            .filter(entity::todo::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
