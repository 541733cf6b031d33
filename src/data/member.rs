//! Member data repository.
//!
//! Handles member creation and lookups. Passwords arrive here already hashed;
//! hashing is the service layer's concern.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::member::{CreateMemberParams, Member};

pub struct MemberRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new member row.
    ///
    /// # Arguments
    /// - `params` - Member fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member with its generated id
    /// - `Err(DbErr)` - Database error, including unique-email violations
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::member::ActiveModel {
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            nickname: ActiveValue::Set(params.nickname),
            profile_image: ActiveValue::Set(params.profile_image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Finds a member by primary key.
    pub async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(member_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Finds a member by their unique email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Checks whether an email address is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
