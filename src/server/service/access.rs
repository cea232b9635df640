//! Board access resolution.
//!
//! Resolves the caller's relationship to a board (stored role, ownership) and runs it
//! through the authorization gate in `model::permission`. Every board-scoped operation
//! starts here, inside the same connection or transaction as the rest of its work.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{board::BoardRepository, board_member::BoardMemberRepository},
    error::{auth::AuthError, AppError},
    model::{
        board::Board,
        permission::{authorize, BoardAction, Denial, EffectiveRole, Role},
    },
};

/// A user's resolved standing on one board.
#[derive(Debug, Clone)]
pub struct BoardAccess {
    pub board: Board,
    pub user_id: i32,
    /// Stored membership role, `None` without a membership row.
    pub role: Option<Role>,
    pub is_owner: bool,
}

impl BoardAccess {
    /// Checks `action` against the gate.
    ///
    /// # Returns
    /// - `Ok(EffectiveRole)` - Action allowed
    /// - `Err(AppError::AuthErr(NotBoardMember))` - No membership and not the owner
    /// - `Err(AppError::AuthErr(AccessDenied))` - Role does not permit the action
    pub fn require(&self, action: impl Into<BoardAction>) -> Result<EffectiveRole, AppError> {
        let action = action.into();

        authorize(self.role, self.is_owner, action).map_err(|denial| {
            tracing::debug!(
                "Denied {:?} for user {} on board {}: {}",
                action,
                self.user_id,
                self.board.id,
                denial
            );

            let err = match denial {
                Denial::NotAMember => AuthError::NotBoardMember(self.user_id, self.board.id),
                other => AuthError::AccessDenied(self.user_id, other.to_string()),
            };
            AppError::from(err)
        })
    }
}

pub struct BoardAccessService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardAccessService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the board and the user's membership on it.
    ///
    /// # Returns
    /// - `Ok(BoardAccess)` - Board exists; the access may still deny every action
    /// - `Err(AppError::NotFound)` - No board with that id
    pub async fn resolve(&self, board_id: i32, user_id: i32) -> Result<BoardAccess, AppError> {
        let board = BoardRepository::new(self.db)
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        let role = BoardMemberRepository::new(self.db)
            .find_role(board_id, user_id)
            .await?;
        let is_owner = board.is_owned_by(user_id);

        Ok(BoardAccess {
            board,
            user_id,
            role,
            is_owner,
        })
    }

    /// Resolves access and requires `action` in one step.
    pub async fn authorize(
        &self,
        board_id: i32,
        user_id: i32,
        action: impl Into<BoardAction>,
    ) -> Result<BoardAccess, AppError> {
        let access = self.resolve(board_id, user_id).await?;
        access.require(action)?;

        Ok(access)
    }
}
