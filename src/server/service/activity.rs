//! Activity feed service.
//!
//! Board and card feeds are readable by anyone who can read the board. A user's own
//! feed spans every board they acted on and is private to them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{activity::ActivityRepository, card::CardRepository},
    error::{auth::AuthError, AppError},
    model::{
        activity::{Activity, ActivityFilter, Page},
        permission::Capability,
    },
    service::access::BoardAccessService,
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a board's activity, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Activity>)` - Entries matching `filter`
    /// - `Err(AppError::NotFound)` - No board with that id
    /// - `Err(AppError::AuthErr)` - The user may not read the board
    pub async fn list_for_board(
        &self,
        board_id: i32,
        user_id: i32,
        filter: ActivityFilter,
    ) -> Result<Vec<Activity>, AppError> {
        BoardAccessService::new(self.db)
            .authorize(board_id, user_id, Capability::Read)
            .await?;

        let activities = ActivityRepository::new(self.db)
            .get_by_board(board_id, &filter)
            .await?;

        Ok(activities)
    }

    pub async fn count_for_board(&self, board_id: i32, user_id: i32) -> Result<u64, AppError> {
        BoardAccessService::new(self.db)
            .authorize(board_id, user_id, Capability::Read)
            .await?;

        let count = ActivityRepository::new(self.db)
            .count_by_board(board_id)
            .await?;

        Ok(count)
    }

    /// Lists the activity of one card, newest first.
    pub async fn list_for_card(
        &self,
        card_id: i32,
        user_id: i32,
        page: Page,
    ) -> Result<Vec<Activity>, AppError> {
        self.authorize_card(card_id, user_id).await?;

        let activities = ActivityRepository::new(self.db)
            .get_by_card(card_id, page)
            .await?;

        Ok(activities)
    }

    pub async fn count_for_card(&self, card_id: i32, user_id: i32) -> Result<u64, AppError> {
        self.authorize_card(card_id, user_id).await?;

        let count = ActivityRepository::new(self.db)
            .count_by_card(card_id)
            .await?;

        Ok(count)
    }

    /// Lists what `target_user_id` did across all boards.
    ///
    /// # Returns
    /// - `Ok(Vec<Activity>)` - The user's entries, newest first
    /// - `Err(AppError::AuthErr(AccessDenied))` - `user_id` asked for someone else's feed
    pub async fn list_for_user(
        &self,
        target_user_id: i32,
        user_id: i32,
        page: Page,
    ) -> Result<Vec<Activity>, AppError> {
        if target_user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                "Users can only view their own activity".to_string(),
            )
            .into());
        }

        let activities = ActivityRepository::new(self.db)
            .get_by_user(user_id, page)
            .await?;

        Ok(activities)
    }

    async fn authorize_card(&self, card_id: i32, user_id: i32) -> Result<(), AppError> {
        let card = CardRepository::new(self.db)
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Card not found".to_string()))?;

        BoardAccessService::new(self.db)
            .authorize(card.board_id, user_id, Capability::Read)
            .await?;

        Ok(())
    }
}
