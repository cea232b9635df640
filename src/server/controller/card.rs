use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ReorderDto},
        card::{ArchiveCardDto, CardDto, CreateCardDto, DuplicateCardDto, MoveCardDto, UpdateCardDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::card::{
            Card, CreateCardParams, DuplicateCardParams, MoveCardParams, UpdateCardParams,
        },
        service::card::CardService,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// List a column's cards in order.
#[utoipa::path(
    get,
    path = "/api/columns/{column_id}/cards",
    tag = CARD_TAG,
    params(
        ("column_id" = i32, Path, description = "Column ID")
    ),
    responses(
        (status = 200, description = "Cards in column order", body = Vec<CardDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cards(
    State(state): State<AppState>,
    session: Session,
    Path(column_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let cards = CardService::new(&state.db).list(column_id, user.id).await?;
    let cards: Vec<CardDto> = cards.into_iter().map(Card::into_dto).collect();

    Ok((StatusCode::OK, Json(cards)))
}

/// Create a card in a column.
///
/// Appended at the end unless `position` is given.
///
/// # Access Control
/// - `Create` on the column's board
#[utoipa::path(
    post,
    path = "/api/columns/{column_id}/cards",
    tag = CARD_TAG,
    params(
        ("column_id" = i32, Path, description = "Column ID")
    ),
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Card created", body = CardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    session: Session,
    Path(column_id): Path<i32>,
    Json(payload): Json<CreateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = CreateCardParams::from_dto(column_id, payload);
    let card = CardService::new(&state.db).create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

/// Reorder a column's cards.
///
/// `ordered_ids` must list every card of the column exactly once.
#[utoipa::path(
    put,
    path = "/api/columns/{column_id}/cards/reorder",
    tag = CARD_TAG,
    params(
        ("column_id" = i32, Path, description = "Column ID")
    ),
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Cards reordered", body = Vec<CardDto>),
        (status = 400, description = "Invalid card id list", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_cards(
    State(state): State<AppState>,
    session: Session,
    Path(column_id): Path<i32>,
    Json(payload): Json<ReorderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let cards = CardService::new(&state.db)
        .reorder(user.id, column_id, &payload.ordered_ids)
        .await?;
    let cards: Vec<CardDto> = cards.into_iter().map(Card::into_dto).collect();

    Ok((StatusCode::OK, Json(cards)))
}

#[utoipa::path(
    get,
    path = "/api/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "The card", body = CardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the board", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let card = CardService::new(&state.db).get(card_id, user.id).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Update a card's fields.
///
/// A `column_id` or `position` in the body relocates the card the same way the move
/// endpoint does.
#[utoipa::path(
    put,
    path = "/api/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Card updated", body = CardDto),
        (status = 400, description = "Target column is on another board", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Card or target column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    Json(payload): Json<UpdateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = UpdateCardParams::from_dto(card_id, payload);
    let card = CardService::new(&state.db).update(user.id, params).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Delete a card.
///
/// # Access Control
/// - `Delete` on the board (admins and the owner)
#[utoipa::path(
    delete,
    path = "/api/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    CardService::new(&state.db).delete(user.id, card_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Move a card to a position in a column of the same board.
///
/// # Returns
/// - `200 OK` - The moved card
/// - `400 Bad Request` - The target column belongs to another board
/// - `404 Not Found` - Card or target column not found
#[utoipa::path(
    put,
    path = "/api/cards/{card_id}/move",
    tag = CARD_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = MoveCardDto,
    responses(
        (status = 200, description = "Card moved", body = CardDto),
        (status = 400, description = "Target column is on another board", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Card or target column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_card(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    Json(payload): Json<MoveCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = MoveCardParams::from_dto(card_id, payload);
    let card = CardService::new(&state.db).move_card(user.id, params).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Duplicate a card into its own column or another column of the same board.
#[utoipa::path(
    post,
    path = "/api/cards/{card_id}/duplicate",
    tag = CARD_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = DuplicateCardDto,
    responses(
        (status = 201, description = "Card duplicated", body = CardDto),
        (status = 400, description = "Target column is on another board", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Card or target column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn duplicate_card(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    Json(payload): Json<DuplicateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let params = DuplicateCardParams::from_dto(card_id, payload);
    let card = CardService::new(&state.db).duplicate(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

/// Archive or unarchive a card.
///
/// Archiving marks the card completed and stamps `completed_at`.
#[utoipa::path(
    put,
    path = "/api/cards/{card_id}/archive",
    tag = CARD_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = ArchiveCardDto,
    responses(
        (status = 200, description = "Card archive state updated", body = CardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role on the board", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_card(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    Json(payload): Json<ArchiveCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let card = CardService::new(&state.db)
        .archive(user.id, card_id, payload.archived)
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}
