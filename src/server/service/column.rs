//! Column service.
//!
//! Every mutation runs in one transaction: authorization reads, position writes, the
//! board's column order and any card updates commit together or not at all.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{
        activity::ActivityRepository, board::BoardRepository,
        board_column::BoardColumnRepository, card::CardRepository, transaction,
    },
    error::{board::BoardError, AppError},
    model::{
        activity::{ActivityAction, NewActivity},
        card::NewCard,
        column::{
            Column, ColumnWithCards, ColumnWithCount, CreateColumnParams, MoveColumnParams,
            UpdateColumnParams,
        },
        permission::Capability,
    },
    service::{
        access::BoardAccessService,
        ordering::{Container, PositionEngine},
    },
};

pub struct ColumnService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ColumnService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a board's columns in order with each column's card count.
    pub async fn list_with_counts(
        &self,
        board_id: i32,
        user_id: i32,
    ) -> Result<Vec<ColumnWithCount>, AppError> {
        BoardAccessService::new(self.db)
            .authorize(board_id, user_id, Capability::Read)
            .await?;

        let columns = BoardColumnRepository::new(self.db)
            .get_with_card_counts(board_id)
            .await?;

        Ok(columns)
    }

    /// Lists a board's columns in order, each with its cards.
    pub async fn list_with_cards(
        &self,
        board_id: i32,
        user_id: i32,
    ) -> Result<Vec<ColumnWithCards>, AppError> {
        BoardAccessService::new(self.db)
            .authorize(board_id, user_id, Capability::Read)
            .await?;

        let columns = BoardColumnRepository::new(self.db)
            .get_by_board(board_id)
            .await?;

        let cards = CardRepository::new(self.db);
        let mut results = Vec::with_capacity(columns.len());
        for column in columns {
            let column_cards = cards.get_by_column(column.id).await?;
            results.push(ColumnWithCards {
                column,
                cards: column_cards,
            });
        }

        Ok(results)
    }

    pub async fn get(&self, column_id: i32, user_id: i32) -> Result<Column, AppError> {
        let column = load_column(self.db, column_id).await?;
        BoardAccessService::new(self.db)
            .authorize(column.board_id, user_id, Capability::Read)
            .await?;

        Ok(column)
    }

    pub async fn get_with_cards(
        &self,
        column_id: i32,
        user_id: i32,
    ) -> Result<ColumnWithCards, AppError> {
        let column = self.get(column_id, user_id).await?;
        let cards = CardRepository::new(self.db).get_by_column(column.id).await?;

        Ok(ColumnWithCards { column, cards })
    }

    /// Creates a column at the end of the board, or at `params.position` when given.
    ///
    /// # Returns
    /// - `Ok(Column)` - The created column with its final position
    /// - `Err(AppError::NotFound)` - No board with that id
    /// - `Err(AppError::AuthErr)` - The user may not create on the board
    pub async fn create(&self, user_id: i32, params: CreateColumnParams) -> Result<Column, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            BoardAccessService::new(&txn)
                .authorize(params.board_id, user_id, Capability::Create)
                .await?;

            let container = Container::BoardColumns(params.board_id);
            let engine = PositionEngine::new(&txn);
            let position = engine.append(container).await?;

            let column = BoardColumnRepository::new(&txn)
                .create(params.board_id, params.name, position)
                .await?;

            match params.position {
                Some(index) => {
                    engine.insert_at(container, column.id, index).await?;
                }
                None => {
                    BoardRepository::new(&txn)
                        .push_column_id(params.board_id, column.id)
                        .await?;
                }
            }

            ActivityRepository::new(&txn)
                .record(NewActivity::board(
                    column.board_id,
                    user_id,
                    ActivityAction::ColumnCreated,
                    json!({ "column_id": column.id, "column_name": column.name }),
                ))
                .await?;

            load_column(&txn, column.id).await
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Renames a column and/or moves it within its board.
    pub async fn update(&self, user_id: i32, params: UpdateColumnParams) -> Result<Column, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let column = load_column(&txn, params.id).await?;
            BoardAccessService::new(&txn)
                .authorize(column.board_id, user_id, Capability::Update)
                .await?;

            if let Some(name) = params.name {
                BoardColumnRepository::new(&txn)
                    .update_name(column.id, name)
                    .await?;
            }

            if let Some(index) = params.position {
                PositionEngine::new(&txn)
                    .insert_at(Container::BoardColumns(column.board_id), column.id, index)
                    .await?;
            }

            let updated = load_column(&txn, column.id).await?;
            ActivityRepository::new(&txn)
                .record(NewActivity::board(
                    updated.board_id,
                    user_id,
                    ActivityAction::ColumnUpdated,
                    json!({
                        "column_id": updated.id,
                        "column_name": updated.name,
                        "previous_name": column.name,
                        "position": updated.position,
                    }),
                ))
                .await?;

            Ok::<_, AppError>(updated)
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Deletes a column with its cards and closes the gap it leaves.
    pub async fn delete(&self, user_id: i32, column_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let column = load_column(&txn, column_id).await?;
            BoardAccessService::new(&txn)
                .authorize(column.board_id, user_id, Capability::Delete)
                .await?;

            BoardColumnRepository::new(&txn).delete(column.id).await?;
            PositionEngine::new(&txn)
                .compact(Container::BoardColumns(column.board_id))
                .await?;

            ActivityRepository::new(&txn)
                .record(NewActivity::board(
                    column.board_id,
                    user_id,
                    ActivityAction::ColumnDeleted,
                    json!({ "column_id": column.id, "column_name": column.name }),
                ))
                .await?;

            Ok::<_, AppError>(())
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Reorders every column of a board to follow `ordered_ids`.
    ///
    /// # Returns
    /// - `Ok(Vec<Column>)` - The board's columns in their new order
    /// - `Err(AppError::BoardErr)` - `ordered_ids` omits, repeats or invents ids
    pub async fn reorder(
        &self,
        user_id: i32,
        board_id: i32,
        ordered_ids: &[i32],
    ) -> Result<Vec<Column>, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            BoardAccessService::new(&txn)
                .authorize(board_id, user_id, Capability::Update)
                .await?;

            let order = PositionEngine::new(&txn)
                .reorder(Container::BoardColumns(board_id), ordered_ids)
                .await?;

            ActivityRepository::new(&txn)
                .record(NewActivity::board(
                    board_id,
                    user_id,
                    ActivityAction::ColumnsReordered,
                    json!({ "column_ids": order }),
                ))
                .await?;

            let columns = BoardColumnRepository::new(&txn)
                .get_by_board(board_id)
                .await?;

            Ok::<_, AppError>(columns)
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Copies a column and all of its cards to the end of the same board.
    ///
    /// The copy is named `name`, or `"<name> (Copy)"` when none is given. Cards keep their
    /// order, content and completion state.
    pub async fn duplicate(
        &self,
        user_id: i32,
        column_id: i32,
        name: Option<String>,
    ) -> Result<ColumnWithCards, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let source = load_column(&txn, column_id).await?;
            BoardAccessService::new(&txn)
                .authorize(source.board_id, user_id, Capability::Create)
                .await?;

            let position = PositionEngine::new(&txn)
                .append(Container::BoardColumns(source.board_id))
                .await?;
            let name = name.unwrap_or_else(|| source.copy_name());

            let copy = BoardColumnRepository::new(&txn)
                .create(source.board_id, name, position)
                .await?;
            BoardRepository::new(&txn)
                .push_column_id(source.board_id, copy.id)
                .await?;

            let cards = CardRepository::new(&txn);
            let originals = cards.get_by_column(source.id).await?;
            let mut copies = Vec::with_capacity(originals.len());
            for (index, card) in originals.into_iter().enumerate() {
                let copied = cards
                    .create(NewCard {
                        board_id: copy.board_id,
                        column_id: copy.id,
                        name: card.name,
                        description: card.description,
                        due_date: card.due_date,
                        completed: card.completed,
                        completed_at: card.completed_at,
                        position: index as i32,
                    })
                    .await?;
                copies.push(copied);
            }

            ActivityRepository::new(&txn)
                .record(NewActivity::board(
                    copy.board_id,
                    user_id,
                    ActivityAction::ColumnCreated,
                    json!({
                        "column_id": copy.id,
                        "column_name": copy.name,
                        "duplicated_from": source.id,
                        "card_count": copies.len(),
                    }),
                ))
                .await?;

            Ok::<_, AppError>(ColumnWithCards {
                column: copy,
                cards: copies,
            })
        }
        .await;

        let duplicated = transaction::finish(txn, result).await?;
        tracing::debug!(
            "Duplicated column {} as {} with {} cards",
            column_id,
            duplicated.column.id,
            duplicated.cards.len()
        );

        Ok(duplicated)
    }

    /// Moves a column within its board or onto another board.
    ///
    /// A cross-board move requires update access on the source board and create access on
    /// the target. The column's cards follow it, and both boards' column orders are
    /// rewritten. Authorization for both boards completes before anything is written.
    ///
    /// # Returns
    /// - `Ok(Column)` - The column in its new place
    /// - `Err(AppError::NotFound)` - No column with that id
    /// - `Err(AppError::BoardErr(TargetBoardNotFound))` - The target board does not exist
    /// - `Err(AppError::AuthErr)` - Access to either board is insufficient
    pub async fn move_column(&self, user_id: i32, params: MoveColumnParams) -> Result<Column, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let column = load_column(&txn, params.id).await?;
            let source_board_id = column.board_id;
            let target_board_id = params.target_board_id;

            let access = BoardAccessService::new(&txn);
            access
                .authorize(source_board_id, user_id, Capability::Update)
                .await?;

            BoardRepository::new(&txn)
                .find_by_id(target_board_id)
                .await?
                .ok_or(BoardError::TargetBoardNotFound(target_board_id))?;

            let engine = PositionEngine::new(&txn);
            let target = Container::BoardColumns(target_board_id);

            if source_board_id == target_board_id {
                let index = params.position.unwrap_or(i32::MAX);
                engine.insert_at(target, column.id, index).await?;
                let moved = load_column(&txn, column.id).await?;

                ActivityRepository::new(&txn)
                    .record(NewActivity::board(
                        source_board_id,
                        user_id,
                        ActivityAction::ColumnMoved,
                        json!({
                            "column_id": column.id,
                            "column_name": column.name,
                            "from_position": column.position,
                            "to_position": moved.position,
                        }),
                    ))
                    .await?;

                return Ok(moved);
            }

            access
                .authorize(target_board_id, user_id, Capability::Create)
                .await?;

            let position = engine.append(target).await?;
            BoardColumnRepository::new(&txn)
                .set_board(column.id, target_board_id, position)
                .await?;
            let cascaded = CardRepository::new(&txn)
                .set_board_for_column(column.id, target_board_id)
                .await?;

            match params.position {
                Some(index) => {
                    engine.insert_at(target, column.id, index).await?;
                }
                None => {
                    BoardRepository::new(&txn)
                        .push_column_id(target_board_id, column.id)
                        .await?;
                }
            }
            engine
                .compact(Container::BoardColumns(source_board_id))
                .await?;

            tracing::info!(
                "User {} moved column {} from board {} to board {} with {} cards",
                user_id,
                column.id,
                source_board_id,
                target_board_id,
                cascaded
            );

            let details = json!({
                "column_id": column.id,
                "column_name": column.name,
                "from_board_id": source_board_id,
                "to_board_id": target_board_id,
                "card_count": cascaded,
            });
            let activities = ActivityRepository::new(&txn);
            for board_id in [source_board_id, target_board_id] {
                activities
                    .record(NewActivity::board(
                        board_id,
                        user_id,
                        ActivityAction::ColumnMoved,
                        details.clone(),
                    ))
                    .await?;
            }

            load_column(&txn, column.id).await
        }
        .await;

        transaction::finish(txn, result).await
    }
}

async fn load_column<C: ConnectionTrait>(db: &C, column_id: i32) -> Result<Column, AppError> {
    BoardColumnRepository::new(db)
        .find_by_id(column_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Column not found".to_string()))
}
