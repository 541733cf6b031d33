use sea_orm::DatabaseConnection;

use crate::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category for the member.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let category = CategoryRepository::new(self.db).create(params).await?;

        Ok(category)
    }

    /// Returns all categories owned by the member.
    pub async fn find_all_by_member(&self, member_id: i64) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db)
            .find_all_by_member(member_id)
            .await?;

        Ok(categories)
    }

    /// Updates a member-owned category.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Category missing or owned by another member
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Deletes a member-owned category.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Category missing or owned by another member
    pub async fn delete(&self, category_id: i64, member_id: i64) -> Result<(), AppError> {
        let deleted = CategoryRepository::new(self.db)
            .delete_by_id_and_member(category_id, member_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }
}
