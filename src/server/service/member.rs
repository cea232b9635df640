//! Board membership service.
//!
//! The owner's standing is fixed: their role cannot be changed, they cannot be removed
//! and they cannot leave. Everyone else is managed by admins. A user who leaves or is
//! removed is also unassigned from every card of the board.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{
        activity::ActivityRepository, board_member::BoardMemberRepository,
        card_member::CardMemberRepository, transaction, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        activity::{ActivityAction, NewActivity},
        member::{AddMemberParams, BoardMember, MemberTarget},
        permission::{BoardAction, Capability, Role},
    },
    service::access::BoardAccessService,
};

pub struct BoardMemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardMemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a board, identified by id or email.
    ///
    /// # Returns
    /// - `Ok(BoardMember)` - The new membership
    /// - `Err(AppError::NotFound)` - Board or user does not exist
    /// - `Err(AppError::Conflict)` - The user is already a member
    /// - `Err(AppError::AuthErr)` - The caller may not invite members
    pub async fn add(&self, user_id: i32, params: AddMemberParams) -> Result<BoardMember, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            BoardAccessService::new(&txn)
                .authorize(params.board_id, user_id, Capability::InviteMembers)
                .await?;

            let users = UserRepository::new(&txn);
            let invitee = match &params.target {
                MemberTarget::UserId(id) => users.find_by_id(*id).await?,
                MemberTarget::Email(email) => users.find_by_email(email).await?,
            }
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

            let members = BoardMemberRepository::new(&txn);
            if members.find_role(params.board_id, invitee.id).await?.is_some() {
                return Err(AppError::Conflict(
                    "User is already a member of this board".to_string(),
                ));
            }

            members
                .create(params.board_id, invitee.id, params.role)
                .await?;

            ActivityRepository::new(&txn)
                .record(NewActivity::board(
                    params.board_id,
                    user_id,
                    ActivityAction::MemberAdded,
                    json!({
                        "user_id": invitee.id,
                        "username": invitee.username,
                        "role": params.role.as_str(),
                    }),
                ))
                .await?;

            members
                .find(params.board_id, invitee.id)
                .await?
                .ok_or_else(|| AppError::NotFound("Member not found after creation".to_string()))
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Lists a board's members.
    pub async fn list(&self, board_id: i32, user_id: i32) -> Result<Vec<BoardMember>, AppError> {
        BoardAccessService::new(self.db)
            .authorize(board_id, user_id, Capability::Read)
            .await?;

        let members = BoardMemberRepository::new(self.db)
            .get_by_board(board_id)
            .await?;

        Ok(members)
    }

    /// Changes the role of `member_id` on a board.
    ///
    /// # Returns
    /// - `Ok(BoardMember)` - The member with the new role
    /// - `Err(AppError::NotFound)` - Board or membership does not exist
    /// - `Err(AppError::AuthErr)` - The caller may not manage the board, or targeted the owner
    pub async fn update_role(
        &self,
        user_id: i32,
        board_id: i32,
        member_id: i32,
        role: Role,
    ) -> Result<BoardMember, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let access = BoardAccessService::new(&txn)
                .authorize(board_id, user_id, Capability::ManageSettings)
                .await?;

            if access.board.is_owned_by(member_id) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    "The board owner's role cannot be changed".to_string(),
                )
                .into());
            }

            let members = BoardMemberRepository::new(&txn);
            let previous = members
                .find_role(board_id, member_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;
            members.update_role(board_id, member_id, role).await?;

            let member = members
                .find(board_id, member_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

            ActivityRepository::new(&txn)
                .record(NewActivity::board(
                    board_id,
                    user_id,
                    ActivityAction::MemberRoleUpdated,
                    json!({
                        "user_id": member.user_id,
                        "username": member.username,
                        "old_role": previous.as_str(),
                        "new_role": role.as_str(),
                    }),
                ))
                .await?;

            Ok::<_, AppError>(member)
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Removes `member_id` from a board.
    pub async fn remove(&self, user_id: i32, board_id: i32, member_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let access = BoardAccessService::new(&txn)
                .authorize(board_id, user_id, Capability::ManageSettings)
                .await?;

            if access.board.is_owned_by(member_id) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    "The board owner cannot be removed".to_string(),
                )
                .into());
            }

            let member = BoardMemberRepository::new(&txn)
                .find(board_id, member_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

            drop_membership(&txn, board_id, user_id, &member).await
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Removes the caller's own membership.
    ///
    /// # Returns
    /// - `Ok(())` - The caller left the board
    /// - `Err(AppError::AuthErr)` - The caller is the owner or not a member
    pub async fn leave(&self, board_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            BoardAccessService::new(&txn)
                .authorize(board_id, user_id, BoardAction::LeaveBoard)
                .await?;

            let member = BoardMemberRepository::new(&txn)
                .find(board_id, user_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

            drop_membership(&txn, board_id, user_id, &member).await
        }
        .await;

        transaction::finish(txn, result).await
    }
}

/// Deletes `member`'s membership and card assignments on the board, recorded as done by
/// `user_id`.
async fn drop_membership<C: ConnectionTrait>(
    db: &C,
    board_id: i32,
    user_id: i32,
    member: &BoardMember,
) -> Result<(), AppError> {
    BoardMemberRepository::new(db)
        .delete(board_id, member.user_id)
        .await?;
    let unassigned = CardMemberRepository::new(db)
        .delete_for_board_user(board_id, member.user_id)
        .await?;

    ActivityRepository::new(db)
        .record(NewActivity::board(
            board_id,
            user_id,
            ActivityAction::MemberRemoved,
            json!({
                "user_id": member.user_id,
                "username": member.username,
                "left": member.user_id == user_id,
                "unassigned_cards": unassigned,
            }),
        ))
        .await?;

    Ok(())
}
