use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::Envelope,
        member::{EmailValidateDto, LoginDto, MemberDto, SignupDto, VerifyCodeDto},
    },
    error::AppError,
    middleware::session::AuthSession,
    model::member::{LoginParams, SignupParams},
    service::{mail::MailService, member::MemberService},
    state::AppState,
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Register a new member.
///
/// Creates a member account with the given email, password, nickname and
/// optional profile image. The email must not already be registered.
///
/// # Returns
/// - `201 Created` - Member created
/// - `400 Bad Request` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/members/signup",
    tag = MEMBER_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Member created", body = Envelope<MemberDto>),
        (status = 400, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let params = SignupParams::from_dto(payload);

    let member = service.signup(params).await?;

    Ok(Envelope::success(
        StatusCode::CREATED,
        "Signup successful",
        member.into_dto(),
    ))
}

/// Send an email verification code.
///
/// Issues a fresh six-digit code for the email and hands it to the mail
/// transport. Reissuing replaces any previous code for the same email.
///
/// # Returns
/// - `200 OK` - Code issued and mail dispatched
/// - `500 Internal Server Error` - Mail or store failure
#[utoipa::path(
    post,
    path = "/api/members/signup/email-validate",
    tag = MEMBER_TAG,
    request_body = EmailValidateDto,
    responses(
        (status = 200, description = "Verification code sent"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn email_validate(
    State(state): State<AppState>,
    Json(payload): Json<EmailValidateDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MailService::new(&state.verification_codes, state.mailer.as_ref());

    service.send_verification_code(&payload.email).await?;

    Ok(Envelope::message(StatusCode::OK, "Verification code sent"))
}

/// Check a submitted verification code.
///
/// Compares the submitted code against the one issued for the email. A
/// matching code is consumed and cannot be replayed.
///
/// # Returns
/// - `200 OK` - Code matched
/// - `400 Bad Request` - Code mismatch, expired, or never issued
#[utoipa::path(
    post,
    path = "/api/members/signup/verifycode",
    tag = MEMBER_TAG,
    request_body = VerifyCodeDto,
    responses(
        (status = 200, description = "Email verified"),
        (status = 400, description = "Verification code does not match"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn verify_code(
    State(state): State<AppState>,
    Json(payload): Json<VerifyCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MailService::new(&state.verification_codes, state.mailer.as_ref());

    service
        .verify_code(&payload.email, &payload.verify_code)
        .await?;

    Ok(Envelope::message(StatusCode::OK, "Email verified"))
}

/// Log a member in.
///
/// Verifies the credentials and stores the member id in the session.
///
/// # Returns
/// - `200 OK` - Logged in; session established
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/members/login",
    tag = MEMBER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = Envelope<MemberDto>),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let params = LoginParams::from_dto(payload);

    let member = service.login(params).await?;

    AuthSession::new(&session).set_member_id(member.id).await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "Login successful",
        member.into_dto(),
    ))
}

/// Log the current member out.
///
/// Clears the session; safe to call without an active login.
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    post,
    path = "/api/members/logout",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Logout successful"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Envelope::message(StatusCode::OK, "Logout successful"))
}
