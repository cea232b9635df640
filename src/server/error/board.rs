use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected structural changes to a board's columns, cards or card assignments.
///
/// Every variant is raised before or in place of a write, and the surrounding
/// transaction is rolled back, so no partial renumbering is ever committed.
#[derive(Error, Debug)]
pub enum BoardError {
    /// A card move or duplicate targets a column on a different board.
    #[error("Cannot move cards between boards")]
    CrossBoardCardMove,

    /// The destination column of a card move or duplicate does not exist.
    #[error("Target column {0} not found")]
    TargetColumnNotFound(i32),

    /// The destination board of a column move does not exist.
    #[error("Target board {0} not found")]
    TargetBoardNotFound(i32),

    /// A card assignment names a user who is not a member of the card's board.
    #[error("User {0} must be a member of the board first")]
    AssigneeNotBoardMember(i32),

    /// A reorder request left out ids currently in the container.
    #[error("Reorder is missing ids: {0:?}")]
    IncompleteReorder(Vec<i32>),

    /// A reorder request named ids that are not in the container.
    #[error("Reorder contains ids not in this container: {0:?}")]
    UnknownReorderIds(Vec<i32>),

    /// A reorder request listed the same id more than once.
    #[error("Reorder contains duplicate ids: {0:?}")]
    DuplicateReorderIds(Vec<i32>),
}

/// All board errors are client mistakes and map to 400 Bad Request with their message.
impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
