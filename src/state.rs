//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! `DatabaseConnection` is a pool handle, `VerificationCodeService` and the
//! mailer are reference-counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::service::mail::{Mailer, VerificationCodeService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// In-memory store for short-lived email verification codes.
    ///
    /// Codes are keyed by email address and expire automatically; see
    /// [`VerificationCodeService`] for the TTL semantics.
    pub verification_codes: VerificationCodeService,

    /// Outbound mail transport used for verification mails.
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        verification_codes: VerificationCodeService,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            db,
            verification_codes,
            mailer,
        }
    }
}
