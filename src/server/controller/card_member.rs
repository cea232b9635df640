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
        card::{AddCardMemberDto, BatchAddCardMembersDto, CardMemberDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::card_member::{AddCardMemberParams, BatchAddCardMembersParams, CardMember},
        service::card_member::CardMemberService,
        state::AppState,
    },
};

/// Tag for grouping card assignment endpoints in OpenAPI documentation
pub static CARD_MEMBER_TAG: &str = "card_member";

/// List the users assigned to a card.
#[utoipa::path(
    get,
    path = "/api/cards/{card_id}/members",
    tag = CARD_MEMBER_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Assigned users in assignment order", body = Vec<CardMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_card_members(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let members = CardMemberService::new(&state.db)
        .list(card_id, user.id)
        .await?;
    let members: Vec<CardMemberDto> = members.into_iter().map(CardMember::into_dto).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Assign a board member to a card.
///
/// # Access Control
/// - `Update` on the card's board; the assignee must belong to the board
#[utoipa::path(
    post,
    path = "/api/cards/{card_id}/members",
    tag = CARD_MEMBER_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = AddCardMemberDto,
    responses(
        (status = 201, description = "User assigned", body = CardMemberDto),
        (status = 400, description = "No user given, or the user is not on the board", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Card or user not found", body = ErrorDto),
        (status = 409, description = "User already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_card_member(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    Json(payload): Json<AddCardMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;
    let params = AddCardMemberParams::from_dto(card_id, payload)?;

    let member = CardMemberService::new(&state.db)
        .add(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Unassign a user from a card.
#[utoipa::path(
    delete,
    path = "/api/cards/{card_id}/members/{user_id}",
    tag = CARD_MEMBER_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID"),
        ("user_id" = i32, Path, description = "Assigned user's ID")
    ),
    responses(
        (status = 204, description = "User unassigned"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Card or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_card_member(
    State(state): State<AppState>,
    session: Session,
    Path((card_id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    CardMemberService::new(&state.db)
        .remove(user.id, card_id, member_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign several board members to a card.
///
/// Users already assigned are skipped; the response lists only new assignments.
#[utoipa::path(
    post,
    path = "/api/cards/{card_id}/members/batch",
    tag = CARD_MEMBER_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = BatchAddCardMembersDto,
    responses(
        (status = 201, description = "Users assigned", body = Vec<CardMemberDto>),
        (status = 400, description = "No users given, or a user is not on the board", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Card or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn batch_add_card_members(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    Json(payload): Json<BatchAddCardMembersDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;
    let params = BatchAddCardMembersParams::from_dto(card_id, payload)?;

    let members = CardMemberService::new(&state.db)
        .batch_add(user.id, params)
        .await?;
    let members: Vec<CardMemberDto> = members.into_iter().map(CardMember::into_dto).collect();

    Ok((StatusCode::CREATED, Json(members)))
}
