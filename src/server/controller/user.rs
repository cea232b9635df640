use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        activity::{ActivityDto, PageQueryDto},
        api::ErrorDto,
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::activity::{Activity, Page},
        service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the signed-in user.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The signed-in user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List a user's own activity across every board.
///
/// # Access Control
/// - Only the user themselves
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/activities",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        PageQueryDto
    ),
    responses(
        (status = 200, description = "The user's entries, newest first", body = Vec<ActivityDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Requested another user's activity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_activities(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Query(query): Query<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let activities = ActivityService::new(&state.db)
        .list_for_user(user_id, user.id, Page::from_dto(query))
        .await?;
    let activities: Vec<ActivityDto> = activities.into_iter().map(Activity::into_dto).collect();

    Ok((StatusCode::OK, Json(activities)))
}
