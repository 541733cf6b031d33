//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db, member.id)
///     .name("Work")
///     .color("#ff0000")
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i64,
    name: String,
    color: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Category {id}"` where id is auto-incremented
    /// - color: `"#3f51b5"`
    pub fn new(db: &'a DatabaseConnection, member_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            name: format!("Category {}", id),
            color: "#3f51b5".to_string(),
        }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let now = Utc::now().naive_utc();
        entity::category::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            category_name: ActiveValue::Set(self.name),
            category_color: ActiveValue::Set(self.color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values for the given member.
///
/// Shorthand for `CategoryFactory::new(db, member_id).build().await`.
pub async fn create_category(
    db: &DatabaseConnection,
    member_id: i64,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db, member_id).build().await
}
