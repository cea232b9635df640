use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ReorderDto},
        column::{ColumnDto, CreateColumnDto, DuplicateColumnDto, MoveColumnDto, UpdateColumnDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::column::{
            Column, ColumnWithCards, ColumnWithCount, CreateColumnParams, MoveColumnParams,
            UpdateColumnParams,
        },
        service::column::ColumnService,
        state::AppState,
    },
};

/// Tag for grouping column endpoints in OpenAPI documentation
pub static COLUMN_TAG: &str = "column";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ColumnQuery {
    /// Embed each column's cards instead of a card count
    #[serde(default)]
    pub include_cards: bool,
}

/// List a board's columns in order.
///
/// Each column carries its card count, or its cards when `include_cards=true`.
///
/// # Access Control
/// - `Read` on the board
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}/columns",
    tag = COLUMN_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID"),
        ColumnQuery
    ),
    responses(
        (status = 200, description = "Columns in board order", body = Vec<ColumnDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_columns(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    Query(query): Query<ColumnQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;
    let service = ColumnService::new(&state.db);

    let columns: Vec<ColumnDto> = if query.include_cards {
        service
            .list_with_cards(board_id, user.id)
            .await?
            .into_iter()
            .map(ColumnWithCards::into_dto)
            .collect()
    } else {
        service
            .list_with_counts(board_id, user.id)
            .await?
            .into_iter()
            .map(ColumnWithCount::into_dto)
            .collect()
    };

    Ok((StatusCode::OK, Json(columns)))
}

/// Create a column on a board.
///
/// Appended at the end unless `position` is given, in which case later columns shift down.
///
/// # Access Control
/// - `Create` on the board (members, admins and the owner)
#[utoipa::path(
    post,
    path = "/api/boards/{board_id}/columns",
    tag = COLUMN_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = CreateColumnDto,
    responses(
        (status = 201, description = "Column created", body = ColumnDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_column(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    Json(payload): Json<CreateColumnDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = CreateColumnParams::from_dto(board_id, payload);
    let column = ColumnService::new(&state.db).create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(column.into_dto())))
}

/// Reorder a board's columns.
///
/// `ordered_ids` must list every column of the board exactly once.
///
/// # Returns
/// - `200 OK` - Columns in their new order
/// - `400 Bad Request` - The id list omits, repeats or invents columns
#[utoipa::path(
    put,
    path = "/api/boards/{board_id}/columns/reorder",
    tag = COLUMN_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Columns reordered", body = Vec<ColumnDto>),
        (status = 400, description = "Invalid column id list", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_columns(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    Json(payload): Json<ReorderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let columns = ColumnService::new(&state.db)
        .reorder(user.id, board_id, &payload.ordered_ids)
        .await?;
    let columns: Vec<ColumnDto> = columns.into_iter().map(Column::into_dto).collect();

    Ok((StatusCode::OK, Json(columns)))
}

/// Get a single column.
#[utoipa::path(
    get,
    path = "/api/columns/{column_id}",
    tag = COLUMN_TAG,
    params(
        ("column_id" = i32, Path, description = "Column ID"),
        ColumnQuery
    ),
    responses(
        (status = 200, description = "The column", body = ColumnDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_column(
    State(state): State<AppState>,
    session: Session,
    Path(column_id): Path<i32>,
    Query(query): Query<ColumnQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;
    let service = ColumnService::new(&state.db);

    let column = if query.include_cards {
        service.get_with_cards(column_id, user.id).await?.into_dto()
    } else {
        service.get(column_id, user.id).await?.into_dto()
    };

    Ok((StatusCode::OK, Json(column)))
}

/// Rename or reposition a column within its board.
#[utoipa::path(
    put,
    path = "/api/columns/{column_id}",
    tag = COLUMN_TAG,
    params(
        ("column_id" = i32, Path, description = "Column ID")
    ),
    request_body = UpdateColumnDto,
    responses(
        (status = 200, description = "Column updated", body = ColumnDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_column(
    State(state): State<AppState>,
    session: Session,
    Path(column_id): Path<i32>,
    Json(payload): Json<UpdateColumnDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = UpdateColumnParams::from_dto(column_id, payload);
    let column = ColumnService::new(&state.db).update(user.id, params).await?;

    Ok((StatusCode::OK, Json(column.into_dto())))
}

/// Delete a column and its cards.
///
/// The remaining columns are renumbered without gaps.
#[utoipa::path(
    delete,
    path = "/api/columns/{column_id}",
    tag = COLUMN_TAG,
    params(
        ("column_id" = i32, Path, description = "Column ID")
    ),
    responses(
        (status = 204, description = "Column deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_column(
    State(state): State<AppState>,
    session: Session,
    Path(column_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    ColumnService::new(&state.db).delete(user.id, column_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Duplicate a column with all of its cards.
///
/// The copy lands at the end of the same board.
#[utoipa::path(
    post,
    path = "/api/columns/{column_id}/duplicate",
    tag = COLUMN_TAG,
    params(
        ("column_id" = i32, Path, description = "Column ID")
    ),
    request_body = DuplicateColumnDto,
    responses(
        (status = 201, description = "Column duplicated", body = ColumnDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn duplicate_column(
    State(state): State<AppState>,
    session: Session,
    Path(column_id): Path<i32>,
    Json(payload): Json<DuplicateColumnDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let copy = ColumnService::new(&state.db)
        .duplicate(user.id, column_id, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(copy.into_dto())))
}

/// Move a column within its board or onto another board.
///
/// Cards travel with the column. Moving to another board requires `Update` on the source
/// and `Create` on the target.
#[utoipa::path(
    put,
    path = "/api/columns/{column_id}/move",
    tag = COLUMN_TAG,
    params(
        ("column_id" = i32, Path, description = "Column ID")
    ),
    request_body = MoveColumnDto,
    responses(
        (status = 200, description = "Column moved", body = ColumnDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the source or target board", body = ErrorDto),
        (status = 404, description = "Column or target board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_column(
    State(state): State<AppState>,
    session: Session,
    Path(column_id): Path<i32>,
    Json(payload): Json<MoveColumnDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = MoveColumnParams::from_dto(column_id, payload);
    let column = ColumnService::new(&state.db)
        .move_column(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(column.into_dto())))
}
