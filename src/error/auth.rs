use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::dto::api::Envelope;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No member id stored in the session; the caller never logged in or the
    /// session expired. Results in 401 Unauthorized.
    #[error("No authenticated member in session")]
    MemberNotInSession,

    /// The session carries a member id that no longer resolves to a row,
    /// signalling a session/database inconsistency. Results in 404 Not Found.
    #[error("Member {0} from session does not exist")]
    MemberNotInDatabase(i64),

    /// Email/password pair did not match a member. Results in 401 Unauthorized
    /// without distinguishing which half was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MemberNotInSession => {
                Envelope::error(StatusCode::UNAUTHORIZED, "Login is required")
            }
            Self::MemberNotInDatabase(member_id) => {
                tracing::debug!("Session member {} not found in database", member_id);
                Envelope::error(StatusCode::NOT_FOUND, "Member not found")
            }
            Self::InvalidCredentials => {
                Envelope::error(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
        }
    }
}
