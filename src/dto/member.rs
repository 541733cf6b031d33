use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    pub email: String,
    pub password: String,
    pub nickname: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Request body for issuing an email verification code.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidateDto {
    pub email: String,
}

/// Request body for checking a previously issued verification code.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeDto {
    pub email: String,
    pub verify_code: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub member_id: i64,
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}
