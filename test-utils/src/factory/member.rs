//! Member factory for creating test member entities.
//!
//! Provides factory methods for creating member entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .email("custom@example.com")
///     .nickname("Custom")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
    nickname: String,
    profile_image: Option<String>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - email: `"member{id}@example.com"` where id is auto-incremented
    /// - password: a fixed placeholder hash (tests that exercise login hash their own)
    /// - nickname: `"Member {id}"`
    /// - profile_image: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("member{}@example.com", id),
            password: "not-a-real-hash".to_string(),
            nickname: format!("Member {}", id),
            profile_image: None,
        }
    }

    /// Sets the email address for the member.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash for the member.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the nickname for the member.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the profile image URL for the member.
    pub fn profile_image(mut self, profile_image: Option<String>) -> Self {
        self.profile_image = profile_image;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now().naive_utc();
        entity::member::ActiveModel {
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            nickname: ActiveValue::Set(self.nickname),
            profile_image: ActiveValue::Set(self.profile_image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a member with a specific email address.
///
/// Shorthand for `MemberFactory::new(db).email(email).build().await`.
pub async fn create_member_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).email(email).build().await
}
