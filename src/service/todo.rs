//! Todo lifecycle service.
//!
//! Owns the ownership-validation rules for todos: a todo's category, when set,
//! must belong to the same member as the todo, and every lookup that feeds a
//! mutation is scoped by `(id, member_id)`. Multi-step operations run inside a
//! single transaction.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{category::CategoryRepository, todo::TodoRepository},
    error::AppError,
    model::todo::{CreateTodoParams, Todo, TodoDate, UpdateTodoParams},
};

pub struct TodoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TodoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requires that the category, when set, belongs to the member.
    ///
    /// A `None` category id skips the check entirely; a todo may have no
    /// category. A category id that does not resolve for this member fails
    /// with NotFound, which covers both a nonexistent id and an id injected
    /// from another member's categories.
    async fn check_member_has_category<C: ConnectionTrait>(
        conn: &C,
        category_id: Option<i64>,
        member_id: i64,
    ) -> Result<(), AppError> {
        let Some(category_id) = category_id else {
            return Ok(());
        };

        CategoryRepository::new(conn)
            .find_by_id_and_member(category_id, member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        Ok(())
    }

    /// Creates a new todo after validating category ownership.
    ///
    /// # Returns
    /// - `Ok(Todo)` - Persisted todo including its generated id
    /// - `Err(AppError::NotFound)` - Category not owned by the member; nothing
    ///   is persisted
    pub async fn create(&self, params: CreateTodoParams) -> Result<Todo, AppError> {
        let txn = self.db.begin().await?;

        Self::check_member_has_category(&txn, params.category_id, params.member_id).await?;

        let todo = TodoRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(todo)
    }

    /// Finds a todo scoped by `(todo_id, member_id)`.
    ///
    /// A missing todo and a todo owned by another member share the NotFound
    /// error path; ownership is enforced by the lookup predicate itself.
    pub async fn find_by_id(&self, todo_id: i64, member_id: i64) -> Result<Todo, AppError> {
        TodoRepository::new(self.db)
            .find_by_id_and_member(todo_id, member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))
    }

    /// Applies all mutable fields from the input onto an existing todo.
    ///
    /// The existing todo is resolved through the member-scoped lookup, the
    /// incoming category is re-validated against the member, and the write is
    /// an explicit update inside the same transaction.
    pub async fn update(&self, params: UpdateTodoParams) -> Result<Todo, AppError> {
        let txn = self.db.begin().await?;
        let repo = TodoRepository::new(&txn);

        repo.find_by_id_and_member(params.todo_id, params.member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

        Self::check_member_has_category(&txn, params.category_id, params.member_id).await?;

        let updated = repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a todo scoped by `(todo_id, member_id)`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Todo missing or owned by another member
    pub async fn delete(&self, todo_id: i64, member_id: i64) -> Result<(), AppError> {
        let deleted = TodoRepository::new(self.db)
            .delete_by_id_and_member(todo_id, member_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Todo not found".to_string()));
        }

        Ok(())
    }

    /// Returns all of a member's todos for client-side search.
    ///
    /// A member with no todos gets an empty vec, not an error.
    pub async fn find_all_by_member(&self, member_id: i64) -> Result<Vec<Todo>, AppError> {
        let todos = TodoRepository::new(self.db)
            .find_all_by_member(member_id)
            .await?;

        Ok(todos)
    }

    /// Loads a favorite (routine) todo onto a target date.
    ///
    /// Fetches the favorite through the member-scoped lookup, re-validates its
    /// category, and creates a fresh todo cloning content and category but
    /// bound to the new date.
    pub async fn load_favorite(
        &self,
        favorite_id: i64,
        member_id: i64,
        date: TodoDate,
    ) -> Result<Todo, AppError> {
        let txn = self.db.begin().await?;
        let repo = TodoRepository::new(&txn);

        let favorite = repo
            .find_by_id_and_member(favorite_id, member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Favorite todo not found".to_string()))?;

        Self::check_member_has_category(&txn, favorite.category_id, member_id).await?;

        let todo = repo
            .create(CreateTodoParams {
                member_id,
                category_id: favorite.category_id,
                content: favorite.content,
                date,
            })
            .await?;

        txn.commit().await?;

        Ok(todo)
    }
}
