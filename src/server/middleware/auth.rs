use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the caller of a request to a user row.
///
/// Board-level permissions are not checked here; they depend on the board a request
/// targets and are enforced by the services.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - The session's user
    /// - `Err(AuthError::UserNotInSession)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - The session's user no longer exists
    pub async fn require_user(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
