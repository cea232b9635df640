use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        board::{BoardDetailsDto, BoardDto, CreateBoardDto, UpdateBoardDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::board::{Board, CreateBoardParams, UpdateBoardParams},
        service::board::BoardService,
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// List boards for the caller.
///
/// Returns every board the caller owns or is a member of, most recently updated first.
///
/// # Access Control
/// - Authenticated user
#[utoipa::path(
    get,
    path = "/api/boards",
    tag = BOARD_TAG,
    responses(
        (status = 200, description = "Boards visible to the caller", body = Vec<BoardDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_boards(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let boards = BoardService::new(&state.db).list_for_user(user.id).await?;
    let boards: Vec<BoardDto> = boards.into_iter().map(Board::into_dto).collect();

    Ok((StatusCode::OK, Json(boards)))
}

/// Create a board.
///
/// The caller becomes the board's owner and its first admin member.
///
/// # Returns
/// - `201 Created` - The new board
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database or transaction error
#[utoipa::path(
    post,
    path = "/api/boards",
    tag = BOARD_TAG,
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Board created", body = BoardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = CreateBoardParams::from_dto(user.id, payload);
    let board = BoardService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(board.into_dto())))
}

/// Get a board with its members and columns.
///
/// Each column carries its cards in order.
///
/// # Access Control
/// - `Read` on the board
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Board details", body = BoardDetailsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let details = BoardService::new(&state.db)
        .get_for_user(board_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Update board settings.
///
/// # Access Control
/// - `ManageSettings` on the board (admins and the owner)
#[utoipa::path(
    put,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Board updated", body = BoardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    Json(payload): Json<UpdateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = UpdateBoardParams::from_dto(board_id, payload);
    let board = BoardService::new(&state.db).update(user.id, params).await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Delete a board with all of its columns and cards.
///
/// # Access Control
/// - Board owner or admin
#[utoipa::path(
    delete,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 204, description = "Board deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Only the owner or an admin can delete the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    BoardService::new(&state.db).delete(board_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
