//! Card assignment service.
//!
//! Only users with standing on the card's board (a membership or ownership) can be
//! assigned. Assigning and unassigning need the `Update` capability; listing needs
//! `Read`. Assignments stay with the card when it moves between columns.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{
        activity::ActivityRepository, board_member::BoardMemberRepository,
        card::CardRepository, card_member::CardMemberRepository, transaction,
        user::UserRepository,
    },
    error::{board::BoardError, AppError},
    model::{
        activity::{ActivityAction, NewActivity},
        card::Card,
        card_member::{AddCardMemberParams, BatchAddCardMembersParams, CardMember},
        member::MemberTarget,
        permission::Capability,
        user::User,
    },
    service::access::{BoardAccess, BoardAccessService},
};

pub struct CardMemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardMemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the users assigned to a card.
    pub async fn list(&self, card_id: i32, user_id: i32) -> Result<Vec<CardMember>, AppError> {
        let card = load_card(self.db, card_id).await?;
        BoardAccessService::new(self.db)
            .authorize(card.board_id, user_id, Capability::Read)
            .await?;

        let members = CardMemberRepository::new(self.db).get_by_card(card.id).await?;

        Ok(members)
    }

    /// Assigns a board member to a card.
    ///
    /// # Returns
    /// - `Ok(CardMember)` - The new assignment
    /// - `Err(AppError::NotFound)` - Card or user does not exist
    /// - `Err(AppError::BoardErr(AssigneeNotBoardMember))` - The user has no standing on the board
    /// - `Err(AppError::Conflict)` - The user is already assigned
    /// - `Err(AppError::AuthErr)` - The caller may not update the board
    pub async fn add(
        &self,
        user_id: i32,
        params: AddCardMemberParams,
    ) -> Result<CardMember, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let card = load_card(&txn, params.card_id).await?;
            let access = BoardAccessService::new(&txn)
                .authorize(card.board_id, user_id, Capability::Update)
                .await?;

            let assignee = resolve_assignee(&txn, &access, &params.target).await?;

            let members = CardMemberRepository::new(&txn);
            if members.find(card.id, assignee.id).await?.is_some() {
                return Err(AppError::Conflict(
                    "User is already assigned to this card".to_string(),
                ));
            }

            members.create(card.id, assignee.id).await?;
            record_assignment(
                &txn,
                &card,
                user_id,
                (assignee.id, &assignee.username),
                ActivityAction::CardAssigned,
            )
            .await?;

            members
                .find(card.id, assignee.id)
                .await?
                .ok_or_else(|| AppError::NotFound("Card member not found after creation".to_string()))
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Unassigns `member_id` from a card.
    ///
    /// # Returns
    /// - `Ok(())` - Assignment removed
    /// - `Err(AppError::NotFound)` - Card does not exist or the user was not assigned
    pub async fn remove(&self, user_id: i32, card_id: i32, member_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let card = load_card(&txn, card_id).await?;
            BoardAccessService::new(&txn)
                .authorize(card.board_id, user_id, Capability::Update)
                .await?;

            let assignee = CardMemberRepository::new(&txn)
                .find(card.id, member_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Card member not found".to_string()))?;

            CardMemberRepository::new(&txn)
                .delete(card.id, member_id)
                .await?;

            record_assignment(
                &txn,
                &card,
                user_id,
                (assignee.user_id, &assignee.username),
                ActivityAction::CardUnassigned,
            )
            .await?;

            Ok::<_, AppError>(())
        }
        .await;

        transaction::finish(txn, result).await
    }

    /// Assigns several users at once.
    ///
    /// Every target is validated before anything is written, so one unknown user or
    /// outsider assigns nobody. Users already assigned are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<CardMember>)` - Only the assignments this call created
    pub async fn batch_add(
        &self,
        user_id: i32,
        params: BatchAddCardMembersParams,
    ) -> Result<Vec<CardMember>, AppError> {
        let txn = self.db.begin().await.map_err(AppError::TransactionErr)?;

        let result = async {
            let card = load_card(&txn, params.card_id).await?;
            let access = BoardAccessService::new(&txn)
                .authorize(card.board_id, user_id, Capability::Update)
                .await?;

            let members = CardMemberRepository::new(&txn);
            let mut seen: HashSet<i32> = members.user_ids(card.id).await?.into_iter().collect();

            let mut assignees = Vec::new();
            for target in &params.targets {
                let assignee = resolve_assignee(&txn, &access, target).await?;
                if seen.insert(assignee.id) {
                    assignees.push(assignee);
                }
            }

            let mut created = Vec::with_capacity(assignees.len());
            for assignee in &assignees {
                members.create(card.id, assignee.id).await?;
                record_assignment(
                    &txn,
                    &card,
                    user_id,
                    (assignee.id, &assignee.username),
                    ActivityAction::CardAssigned,
                )
                .await?;

                if let Some(member) = members.find(card.id, assignee.id).await? {
                    created.push(member);
                }
            }

            tracing::debug!(
                "Assigned {} of {} requested users to card {}",
                created.len(),
                params.targets.len(),
                card.id
            );

            Ok::<_, AppError>(created)
        }
        .await;

        transaction::finish(txn, result).await
    }
}

/// Looks up `target` and checks it has standing on the board in `access`.
async fn resolve_assignee<C: ConnectionTrait>(
    db: &C,
    access: &BoardAccess,
    target: &MemberTarget,
) -> Result<User, AppError> {
    let users = UserRepository::new(db);
    let user = match target {
        MemberTarget::UserId(id) => users.find_by_id(*id).await?,
        MemberTarget::Email(email) => users.find_by_email(email).await?,
    }
    .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let is_member = BoardMemberRepository::new(db)
        .find_role(access.board.id, user.id)
        .await?
        .is_some();

    if !is_member && !access.board.is_owned_by(user.id) {
        return Err(BoardError::AssigneeNotBoardMember(user.id).into());
    }

    Ok(user)
}

/// Records an assignment change; `assignee` is the affected user's id and username.
async fn record_assignment<C: ConnectionTrait>(
    db: &C,
    card: &Card,
    user_id: i32,
    assignee: (i32, &str),
    action: ActivityAction,
) -> Result<(), AppError> {
    ActivityRepository::new(db)
        .record(NewActivity::card(
            card.board_id,
            card.id,
            user_id,
            action,
            json!({
                "card_name": card.name,
                "user_id": assignee.0,
                "username": assignee.1,
            }),
        ))
        .await?;

    Ok(())
}

async fn load_card<C: ConnectionTrait>(db: &C, card_id: i32) -> Result<Card, AppError> {
    CardRepository::new(db)
        .find_by_id(card_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Card not found".to_string()))
}
