//! Type-safe session management wrapper.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the
//! authentication-state operations, centralizing the session key so handlers
//! never touch raw string keys.

use tower_sessions::Session;

use crate::error::AppError;

pub const SESSION_AUTH_MEMBER_ID: &str = "auth:member";

/// Authentication session management.
///
/// Handles the logged-in member's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the member's id in the session.
    ///
    /// Called after successful login to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - Member id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_member_id(&self, member_id: i64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_MEMBER_ID, member_id)
            .await?;
        Ok(())
    }

    /// Retrieves the member's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(member_id))` - Member is logged in
    /// - `Ok(None)` - No member in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_member_id(&self) -> Result<Option<i64>, AppError> {
        let member_id = self.session.get::<i64>(SESSION_AUTH_MEMBER_ID).await?;

        Ok(member_id)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove the authentication state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
