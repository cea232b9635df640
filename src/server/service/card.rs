//! Card service.
//!
//! Cards never leave their board. Moves between columns of the same board are
//! coordinated here: validate the target, authorize, reposition in the target column
//! and compact the column the card left, all in one transaction.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{
        activity::ActivityRepository, board_column::BoardColumnRepository, card::CardRepository,
        transaction,
    },
    error::{board::BoardError, AppError},
    model::{
        activity::{ActivityAction, NewActivity},
        card::{Card, CreateCardParams, DuplicateCardParams, MoveCardParams, NewCard, UpdateCardParams},
        column::Column,
        permission::Capability,
    },
    service::{
        access::BoardAccessService,
        ordering::{Container, PositionEngine},
    },
};

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a column's cards in position order.
    pub async fn list(&self, column_id: i32, user_id: i32) -> Result<Vec<Card>, AppError> {
        let column = load_column(self.db, column_id).await?;
        BoardAccessService::new(self.db)
            .authorize(column.board_id, user_id, Capability::Read)
            .await?;

        let cards = CardRepository::new(self.db).get_by_column(column_id).await?;

        Ok(cards)
    }

    pub async fn get(&self, card_id: i32, user_id: i32) -> Result<Card, AppError> {
        let card = load_card(self.db, card_id).await?;
        BoardAccessService::new(self.db)
            .authorize(card.board_id, user_id, Capability::Read)
            .await?;

        Ok(card)
    }

    /// Creates a card at the end of a column, or at `params.position` when given.
    ///
    /// # Returns
    /// - `Ok(Card)` - The created card with its final position
    /// - `Err(AppError::NotFound)` - No column with that id
    /// - `Err(AppError::AuthErr)` - The user may not create on the board
    pub async fn create(&self, user_id: i32, params: CreateCardParams) -> Result<Card, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let column = load_column(&txn, params.column_id).await?;
            BoardAccessService::new(&txn)
                .authorize(column.board_id, user_id, Capability::Create)
                .await?;

            let container = Container::ColumnCards(column.id);
            let engine = PositionEngine::new(&txn);
            let position = engine.append(container).await?;

            let card = CardRepository::new(&txn)
                .create(NewCard {
                    board_id: column.board_id,
                    column_id: column.id,
                    name: params.name,
                    description: params.description,
                    due_date: params.due_date,
                    completed: false,
                    completed_at: None,
                    position,
                })
                .await?;

            if let Some(index) = params.position {
                engine.insert_at(container, card.id, index).await?;
            }

            ActivityRepository::new(&txn)
                .record(NewActivity::card(
                    card.board_id,
                    card.id,
                    user_id,
                    ActivityAction::CardCreated,
                    json!({ "card_name": card.name, "column_id": column.id }),
                ))
                .await?;

            load_card(&txn, card.id).await
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Updates a card's fields. A new column or position is handled as a move.
    pub async fn update(&self, user_id: i32, params: UpdateCardParams) -> Result<Card, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let card = load_card(&txn, params.id).await?;
            BoardAccessService::new(&txn)
                .authorize(card.board_id, user_id, Capability::Update)
                .await?;

            if params.relocates() {
                let target_column_id = params.column_id.unwrap_or(card.column_id);
                let target = load_target_column(&txn, target_column_id).await?;
                relocate(&txn, &card, &target, params.position).await?;
            }

            let updated = CardRepository::new(&txn)
                .update(&params)
                .await?
                .ok_or_else(|| AppError::NotFound("Card not found".to_string()))?;

            ActivityRepository::new(&txn)
                .record(NewActivity::card(
                    updated.board_id,
                    updated.id,
                    user_id,
                    ActivityAction::CardUpdated,
                    json!({
                        "card_name": updated.name,
                        "from_column_id": card.column_id,
                        "to_column_id": updated.column_id,
                    }),
                ))
                .await?;

            Ok::<_, AppError>(updated)
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Deletes a card and closes the gap it leaves in its column.
    pub async fn delete(&self, user_id: i32, card_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let card = load_card(&txn, card_id).await?;
            BoardAccessService::new(&txn)
                .authorize(card.board_id, user_id, Capability::Delete)
                .await?;

            CardRepository::new(&txn).delete(card.id).await?;
            PositionEngine::new(&txn)
                .compact(Container::ColumnCards(card.column_id))
                .await?;

            ActivityRepository::new(&txn)
                .record(NewActivity::card(
                    card.board_id,
                    card.id,
                    user_id,
                    ActivityAction::CardDeleted,
                    json!({ "card_name": card.name, "column_id": card.column_id }),
                ))
                .await?;

            Ok::<_, AppError>(())
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Reorders every card of a column to follow `ordered_ids`.
    ///
    /// # Returns
    /// - `Ok(Vec<Card>)` - The column's cards in their new order
    /// - `Err(AppError::BoardErr)` - `ordered_ids` omits, repeats or invents ids
    pub async fn reorder(
        &self,
        user_id: i32,
        column_id: i32,
        ordered_ids: &[i32],
    ) -> Result<Vec<Card>, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let column = load_column(&txn, column_id).await?;
            BoardAccessService::new(&txn)
                .authorize(column.board_id, user_id, Capability::Update)
                .await?;

            let order = PositionEngine::new(&txn)
                .reorder(Container::ColumnCards(column.id), ordered_ids)
                .await?;

            ActivityRepository::new(&txn)
                .record(NewActivity::board(
                    column.board_id,
                    user_id,
                    ActivityAction::CardsReordered,
                    json!({
                        "column_id": column.id,
                        "column_name": column.name,
                        "card_ids": order,
                    }),
                ))
                .await?;

            let cards = CardRepository::new(&txn).get_by_column(column.id).await?;

            Ok::<_, AppError>(cards)
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Moves a card to a position in a column of the same board.
    ///
    /// Without a position the card goes to the end of the target column.
    ///
    /// # Returns
    /// - `Ok(Card)` - The card in its new place
    /// - `Err(AppError::NotFound)` - No card with that id
    /// - `Err(AppError::BoardErr(TargetColumnNotFound))` - The target column does not exist
    /// - `Err(AppError::BoardErr(CrossBoardCardMove))` - The target column is on another board
    pub async fn move_card(&self, user_id: i32, params: MoveCardParams) -> Result<Card, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let card = load_card(&txn, params.id).await?;
            let target = load_target_column(&txn, params.target_column_id).await?;
            BoardAccessService::new(&txn)
                .authorize(card.board_id, user_id, Capability::Update)
                .await?;

            relocate(&txn, &card, &target, params.position).await?;
            let moved = load_card(&txn, card.id).await?;

            ActivityRepository::new(&txn)
                .record(NewActivity::card(
                    moved.board_id,
                    moved.id,
                    user_id,
                    ActivityAction::CardMoved,
                    json!({
                        "card_name": moved.name,
                        "from_column_id": card.column_id,
                        "to_column_id": moved.column_id,
                        "from_position": card.position,
                        "to_position": moved.position,
                    }),
                ))
                .await?;

            Ok::<_, AppError>(moved)
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Copies a card to the end of a column on the same board.
    ///
    /// The copy lands in the original's column unless `target_column_id` is given, and is
    /// named `name` or `"<name> (Copy)"`. Completion is not copied.
    pub async fn duplicate(&self, user_id: i32, params: DuplicateCardParams) -> Result<Card, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let source = load_card(&txn, params.id).await?;
            let target_column_id = params.target_column_id.unwrap_or(source.column_id);
            let target = load_target_column(&txn, target_column_id).await?;

            if target.board_id != source.board_id {
                return Err(BoardError::CrossBoardCardMove.into());
            }

            BoardAccessService::new(&txn)
                .authorize(source.board_id, user_id, Capability::Create)
                .await?;

            let position = PositionEngine::new(&txn)
                .append(Container::ColumnCards(target.id))
                .await?;
            let name = params.name.unwrap_or_else(|| source.copy_name());

            let copy = CardRepository::new(&txn)
                .create(NewCard {
                    board_id: target.board_id,
                    column_id: target.id,
                    name,
                    description: source.description,
                    due_date: source.due_date,
                    completed: false,
                    completed_at: None,
                    position,
                })
                .await?;

            ActivityRepository::new(&txn)
                .record(NewActivity::card(
                    copy.board_id,
                    copy.id,
                    user_id,
                    ActivityAction::CardCreated,
                    json!({
                        "card_name": copy.name,
                        "column_id": copy.column_id,
                        "duplicated_from": source.id,
                    }),
                ))
                .await?;

            Ok::<_, AppError>(copy)
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Marks a card completed (archived) or reopens it.
    pub async fn archive(&self, user_id: i32, card_id: i32, archived: bool) -> Result<Card, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let card = load_card(&txn, card_id).await?;
            BoardAccessService::new(&txn)
                .authorize(card.board_id, user_id, Capability::Update)
                .await?;

            let updated = CardRepository::new(&txn)
                .set_completed(card.id, archived)
                .await?
                .ok_or_else(|| AppError::NotFound("Card not found".to_string()))?;

            let action = if archived {
                ActivityAction::CardArchived
            } else {
                ActivityAction::CardRestored
            };
            ActivityRepository::new(&txn)
                .record(NewActivity::card(
                    updated.board_id,
                    updated.id,
                    user_id,
                    action,
                    json!({ "card_name": updated.name }),
                ))
                .await?;

            Ok::<_, AppError>(updated)
        }
        .await;

        transaction::finish(txn, result).await
    }
}

/// Repositions `card` in `target`, which must be on the card's board.
///
/// A move inside the same column only renumbers that column. A move to another column
/// appends the card there, places it at `position` if one was given, and compacts the
/// column it left.
async fn relocate<C: ConnectionTrait>(
    db: &C,
    card: &Card,
    target: &Column,
    position: Option<i32>,
) -> Result<(), AppError> {
    if target.board_id != card.board_id {
        return Err(BoardError::CrossBoardCardMove.into());
    }

    let engine = PositionEngine::new(db);
    let container = Container::ColumnCards(target.id);

    if target.id == card.column_id {
        let index = position.unwrap_or(i32::MAX);
        engine.insert_at(container, card.id, index).await?;

        return Ok(());
    }

    let appended = engine.append(container).await?;
    CardRepository::new(db)
        .set_column(card.id, target.id, appended)
        .await?;

    if let Some(index) = position {
        engine.insert_at(container, card.id, index).await?;
    }
    engine
        .compact(Container::ColumnCards(card.column_id))
        .await?;

    tracing::debug!(
        "Moved card {} from column {} to column {}",
        card.id,
        card.column_id,
        target.id
    );

    Ok(())
}

async fn load_card<C: ConnectionTrait>(db: &C, card_id: i32) -> Result<Card, AppError> {
    CardRepository::new(db)
        .find_by_id(card_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".to_string()))
}

async fn load_column<C: ConnectionTrait>(db: &C, column_id: i32) -> Result<Column, AppError> {
    BoardColumnRepository::new(db)
        .find_by_id(column_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Column not found".to_string()))
}

async fn load_target_column<C: ConnectionTrait>(
    db: &C,
    column_id: i32,
) -> Result<Column, AppError> {
    BoardColumnRepository::new(db)
        .find_by_id(column_id)
        .await?
        .ok_or_else(|| BoardError::TargetColumnNotFound(column_id).into())
}
