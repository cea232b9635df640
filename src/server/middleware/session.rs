//! Type-safe session management wrappers.
//!
//! The session is populated by the upstream authentication layer. This service only
//! reads the authenticated user's id from it, through `AuthSession`, so the key name and
//! value type live in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session state.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated user's id.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
