//! Error types and HTTP response handling.
//!
//! The `AppError` enum is the top-level error type that wraps domain-specific
//! errors and implements `IntoResponse`, so every handler can return
//! `Result<_, AppError>` and rely on the uniform envelope being produced for
//! failures as well as successes.

pub mod auth;
pub mod config;

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{
    dto::api::Envelope,
    error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain-specific errors
/// like `AuthError` map to their own status codes; infrastructure errors are
/// logged server-side and surface as a generic 500 envelope.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found: absent member, todo missing or owned by another
    /// member, category not owned by the acting member.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request: duplicate signup email, verification code mismatch.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Every outcome is rendered through the uniform `{statusCode, message, data}`
/// envelope with the HTTP status mirrored in `statusCode`. Internal errors are
/// logged with full details but return a generic message to avoid information
/// leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => Envelope::error(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => Envelope::error(StatusCode::BAD_REQUEST, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                Envelope::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => {
                tracing::error!("{}", err);
                Envelope::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
