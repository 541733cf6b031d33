use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::member::Member,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in member or fails the request.
    ///
    /// # Returns
    /// - `Ok(Member)` - Session carries a member id that resolves in the database
    /// - `Err(AuthError::MemberNotInSession)` - No member id in the session
    /// - `Err(AuthError::MemberNotInDatabase)` - Session member id no longer exists
    pub async fn require(&self) -> Result<Member, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(member_id) = auth_session.get_member_id().await? else {
            return Err(AuthError::MemberNotInSession.into());
        };

        let Some(member) = MemberRepository::new(self.db).find_by_id(member_id).await? else {
            return Err(AuthError::MemberNotInDatabase(member_id).into());
        };

        Ok(member)
    }
}
