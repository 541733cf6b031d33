//! Category data repository.
//!
//! Every read and mutation is scoped by member id; there is no unscoped lookup,
//! so a category id belonging to another member behaves as if it did not exist.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::category::{Category, CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new category for a member.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::category::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            category_name: ActiveValue::Set(params.name),
            category_color: ActiveValue::Set(params.color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Finds a category scoped by `(category_id, member_id)`.
    ///
    /// This is the ownership check itself: a category owned by a different
    /// member resolves to `None`.
    pub async fn find_by_id_and_member(
        &self,
        category_id: i64,
        member_id: i64,
    ) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(category_id)
            .filter(entity::category::Column::MemberId.eq(member_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Returns all categories owned by a member, oldest first.
    pub async fn find_all_by_member(&self, member_id: i64) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .filter(entity::category::Column::MemberId.eq(member_id))
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Updates a category's name and color via an explicit update call.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - Updated category
    /// - `Ok(None)` - No category with that id owned by the member
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Option<Category>, DbErr> {
        let Some(model) = entity::prelude::Category::find_by_id(params.id)
            .filter(entity::category::Column::MemberId.eq(params.member_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = model.into();
        active.category_name = ActiveValue::Set(params.name);
        active.category_color = ActiveValue::Set(params.color);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let updated = active.update(self.db).await?;

        Ok(Some(Category::from_entity(updated)))
    }

    /// Deletes a category scoped by `(category_id, member_id)`.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No category with that id owned by the member
    pub async fn delete_by_id_and_member(
        &self,
        category_id: i64,
        member_id: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_many()
            .filter(entity::category::Column::Id.eq(category_id))
            .filter(entity::category::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
