//! Board service.
//!
//! Creating a board seeds the creator's admin membership in the same transaction, so a
//! board is never visible without at least its owner as a member.

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{
        board::BoardRepository, board_column::BoardColumnRepository,
        board_member::BoardMemberRepository, card::CardRepository, transaction,
    },
    error::AppError,
    model::{
        board::{Board, BoardDetails, CreateBoardParams, UpdateBoardParams},
        card::Card,
        column::ColumnWithCards,
        permission::{BoardAction, Capability, Role},
    },
    service::access::BoardAccessService,
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a board owned by `params.owner_id` with the owner as admin member.
    ///
    /// # Returns
    /// - `Ok(Board)` - The created board
    /// - `Err(AppError::TransactionErr)` - A write failed; nothing was stored
    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let owner_id = params.owner_id;
            let board = BoardRepository::new(&txn).create(params).await?;
            BoardMemberRepository::new(&txn)
                .create(board.id, owner_id, Role::Admin)
                .await?;

            Ok::<_, AppError>(board)
        }
        .await;

        let board = transaction::finish(txn, result).await?;
        tracing::info!("User {} created board {}", board.owner_id, board.id);

        Ok(board)
    }

    /// Loads a board with its members and columns, each column carrying its cards.
    ///
    /// # Returns
    /// - `Ok(BoardDetails)` - The board as seen by `user_id`
    /// - `Err(AppError::NotFound)` - No board with that id
    /// - `Err(AppError::AuthErr)` - The user may not read the board
    pub async fn get_for_user(&self, board_id: i32, user_id: i32) -> Result<BoardDetails, AppError> {
        let access = BoardAccessService::new(self.db)
            .resolve(board_id, user_id)
            .await?;
        let role = access.require(Capability::Read)?;

        let members = BoardMemberRepository::new(self.db)
            .get_by_board(board_id)
            .await?;
        let columns = BoardColumnRepository::new(self.db)
            .get_by_board(board_id)
            .await?;
        let cards = CardRepository::new(self.db).get_by_board(board_id).await?;

        let mut cards_by_column: HashMap<i32, Vec<Card>> = HashMap::new();
        for card in cards {
            cards_by_column.entry(card.column_id).or_default().push(card);
        }

        let columns = columns
            .into_iter()
            .map(|column| {
                let cards = cards_by_column.remove(&column.id).unwrap_or_default();
                ColumnWithCards { column, cards }
            })
            .collect();

        Ok(BoardDetails {
            board: access.board,
            role,
            members,
            columns,
        })
    }

    /// Lists the boards `user_id` owns or is a member of, most recently updated first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Board>, AppError> {
        let boards = BoardRepository::new(self.db).get_for_user(user_id).await?;

        Ok(boards)
    }

    /// Updates board settings.
    ///
    /// # Returns
    /// - `Ok(Board)` - The updated board
    /// - `Err(AppError::NotFound)` - No board with that id
    /// - `Err(AppError::AuthErr)` - The user may not manage settings
    pub async fn update(&self, user_id: i32, params: UpdateBoardParams) -> Result<Board, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            BoardAccessService::new(&txn)
                .authorize(params.id, user_id, Capability::ManageSettings)
                .await?;

            BoardRepository::new(&txn)
                .update(params)
                .await?
                .ok_or_else(|| AppError::NotFound("Board not found".to_string()))
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Deletes a board with all of its members, columns and cards.
    ///
    /// Allowed for the owner and for admins.
    pub async fn delete(&self, board_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            BoardAccessService::new(&txn)
                .authorize(board_id, user_id, BoardAction::DeleteBoard)
                .await?;
            BoardRepository::new(&txn).delete(board_id).await?;

            Ok::<_, AppError>(())
        }
        .await;

        transaction::finish(txn, result).await?;
        tracing::info!("User {} deleted board {}", user_id, board_id);

        Ok(())
    }
}
