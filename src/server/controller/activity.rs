use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        activity::{ActivityDto, ActivityQueryDto, CountDto, PageQueryDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::activity::{Activity, ActivityFilter, Page},
        service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity feed endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// List a board's activity, newest first.
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}/activities",
    tag = ACTIVITY_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID"),
        ActivityQueryDto
    ),
    responses(
        (status = 200, description = "Matching entries", body = Vec<ActivityDto>),
        (status = 400, description = "Unknown action filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_board_activities(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    Query(query): Query<ActivityQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;
    let filter = ActivityFilter::from_dto(query)?;

    let activities = ActivityService::new(&state.db)
        .list_for_board(board_id, user.id, filter)
        .await?;
    let activities: Vec<ActivityDto> = activities.into_iter().map(Activity::into_dto).collect();

    Ok((StatusCode::OK, Json(activities)))
}

/// Count a board's activity entries.
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}/activities/count",
    tag = ACTIVITY_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Entry count", body = CountDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_board_activities(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let count = ActivityService::new(&state.db)
        .count_for_board(board_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// List a card's activity, newest first.
#[utoipa::path(
    get,
    path = "/api/cards/{card_id}/activities",
    tag = ACTIVITY_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID"),
        PageQueryDto
    ),
    responses(
        (status = 200, description = "Card entries", body = Vec<ActivityDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_card_activities(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let activities = ActivityService::new(&state.db)
        .list_for_card(card_id, user.id, Page::from_dto(query))
        .await?;
    let activities: Vec<ActivityDto> = activities.into_iter().map(Activity::into_dto).collect();

    Ok((StatusCode::OK, Json(activities)))
}

/// Count a card's activity entries.
#[utoipa::path(
    get,
    path = "/api/cards/{card_id}/activities/count",
    tag = ACTIVITY_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Entry count", body = CountDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_card_activities(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let count = ActivityService::new(&state.db)
        .count_for_card(card_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}
