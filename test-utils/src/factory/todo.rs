//! Todo factory for creating test todo entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test todos with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::todo::TodoFactory;
///
/// let todo = TodoFactory::new(&db, member.id)
///     .category_id(Some(category.id))
///     .content("Water the plants")
///     .date(2026, 3, 14)
///     .is_favorite(true)
///     .build()
///     .await?;
/// ```
pub struct TodoFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i64,
    category_id: Option<i64>,
    content: String,
    year: i32,
    month: i32,
    day: i32,
    is_completed: bool,
    is_favorite: bool,
}

impl<'a> TodoFactory<'a> {
    /// Creates a new TodoFactory with default values.
    ///
    /// Defaults:
    /// - category_id: `None`
    /// - content: `"Todo {id}"` where id is auto-incremented
    /// - date: 2026-01-15
    /// - is_completed: `false`
    /// - is_favorite: `false`
    pub fn new(db: &'a DatabaseConnection, member_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            category_id: None,
            content: format!("Todo {}", id),
            year: 2026,
            month: 1,
            day: 15,
            is_completed: false,
            is_favorite: false,
        }
    }

    /// Sets the category for the todo.
    pub fn category_id(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the todo content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the calendar date for the todo.
    pub fn date(mut self, year: i32, month: i32, day: i32) -> Self {
        self.year = year;
        self.month = month;
        self.day = day;
        self
    }

    /// Sets the completion flag.
    pub fn is_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Sets the favorite (routine) flag.
    pub fn is_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Builds and inserts the todo entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::todo::Model)` - Created todo entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::todo::Model, DbErr> {
        let now = Utc::now().naive_utc();
        entity::todo::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            category_id: ActiveValue::Set(self.category_id),
            todo_content: ActiveValue::Set(self.content),
            todo_year: ActiveValue::Set(self.year),
            todo_month: ActiveValue::Set(self.month),
            todo_day: ActiveValue::Set(self.day),
            is_completed: ActiveValue::Set(self.is_completed),
            is_favorite: ActiveValue::Set(self.is_favorite),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a todo with default values for the given member.
///
/// Shorthand for `TodoFactory::new(db, member_id).build().await`.
pub async fn create_todo(
    db: &DatabaseConnection,
    member_id: i64,
) -> Result<entity::todo::Model, DbErr> {
    TodoFactory::new(db, member_id).build().await
}
