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
        member::{AddMemberDto, BoardMemberDto, UpdateMemberRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            member::{AddMemberParams, BoardMember},
            permission::Role,
        },
        service::member::BoardMemberService,
        state::AppState,
    },
};

/// Tag for grouping membership endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// List a board's members.
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}/members",
    tag = MEMBER_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Board members", body = Vec<BoardMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_members(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let members = BoardMemberService::new(&state.db)
        .list(board_id, user.id)
        .await?;
    let members: Vec<BoardMemberDto> = members.into_iter().map(BoardMember::into_dto).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Add a member to a board.
///
/// The user is identified by `user_id` or `email`. The role defaults to `member`.
///
/// # Access Control
/// - `InviteMembers` on the board (admins and the owner)
///
/// # Returns
/// - `201 Created` - The new membership
/// - `400 Bad Request` - Neither a user id nor an email was given
/// - `404 Not Found` - Board or user not found
/// - `409 Conflict` - The user is already a member
#[utoipa::path(
    post,
    path = "/api/boards/{board_id}/members",
    tag = MEMBER_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = AddMemberDto,
    responses(
        (status = 201, description = "Member added", body = BoardMemberDto),
        (status = 400, description = "No user identified", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Board or user not found", body = ErrorDto),
        (status = 409, description = "User is already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_member(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    Json(payload): Json<AddMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = AddMemberParams::from_dto(board_id, payload)?;
    let member = BoardMemberService::new(&state.db)
        .add(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Change a member's role.
///
/// The owner's role cannot be changed.
#[utoipa::path(
    put,
    path = "/api/boards/{board_id}/members/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID"),
        ("user_id" = i32, Path, description = "Member's user ID")
    ),
    request_body = UpdateMemberRoleDto,
    responses(
        (status = 200, description = "Role updated", body = BoardMemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role, or the target is the owner", body = ErrorDto),
        (status = 404, description = "Board or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_role(
    State(state): State<AppState>,
    session: Session,
    Path((board_id, member_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMemberRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let member = BoardMemberService::new(&state.db)
        .update_role(user.id, board_id, member_id, Role::from_dto(payload.role))
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Remove a member from a board.
///
/// The owner cannot be removed.
#[utoipa::path(
    delete,
    path = "/api/boards/{board_id}/members/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID"),
        ("user_id" = i32, Path, description = "Member's user ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role, or the target is the owner", body = ErrorDto),
        (status = 404, description = "Board or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((board_id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    BoardMemberService::new(&state.db)
        .remove(user.id, board_id, member_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Leave a board.
///
/// Open to every member except the owner.
#[utoipa::path(
    post,
    path = "/api/boards/{board_id}/leave",
    tag = MEMBER_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 204, description = "Left the board"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member, or the caller owns the board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_board(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    BoardMemberService::new(&state.db)
        .leave(board_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
