use chrono::NaiveDateTime;

use crate::dto::member::{LoginDto, MemberDto, SignupDto};

/// A registered member.
///
/// Carries the argon2 password hash for credential verification; the hash is
/// dropped when converting to the DTO.
#[derive(Debug, Clone)]
pub struct Member {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password: entity.password,
            nickname: entity.nickname,
            profile_image: entity.profile_image,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            member_id: self.id,
            email: self.email,
            nickname: self.nickname,
            profile_image: self.profile_image,
        }
    }
}

/// Signup input before the password is hashed.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}

impl SignupParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            nickname: dto.nickname,
            profile_image: dto.profile_image,
        }
    }
}

/// Insert parameters after the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
