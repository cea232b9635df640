use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the request's session.
    ///
    /// The upstream authentication layer has not established an identity for this
    /// request. Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user with ID {0} in database")]
    UserNotInDatabase(i32),

    /// The user has no membership on the board and does not own it.
    ///
    /// # Fields
    /// - User ID
    /// - Board ID
    #[error("User {0} is not a member of board {1}")]
    NotBoardMember(i32, i32),

    /// The user's effective role on the board does not permit the action.
    ///
    /// # Fields
    /// - User ID
    /// - Reason the authorization gate denied the action
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not authenticated"
/// - `NotBoardMember` → 403 Forbidden with "You are not a member of this board"
/// - `AccessDenied` → 403 Forbidden with the denial reason
///
/// All errors are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::NotBoardMember(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You are not a member of this board".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, reason) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}
