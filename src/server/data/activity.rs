//! Activity log repository.
//!
//! Entries are append-only and listed newest first, with ties broken by id.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::activity::{Activity, ActivityFilter, NewActivity, Page};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an entry to the log.
    pub async fn record(&self, activity: NewActivity) -> Result<(), DbErr> {
        entity::activity::ActiveModel {
            board_id: ActiveValue::Set(activity.board_id),
            card_id: ActiveValue::Set(activity.card_id),
            user_id: ActiveValue::Set(activity.user_id),
            action: ActiveValue::Set(activity.action.as_str().to_string()),
            details: ActiveValue::Set(activity.details.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets a board's entries matching `filter`, newest first.
    pub async fn get_by_board(
        &self,
        board_id: i32,
        filter: &ActivityFilter,
    ) -> Result<Vec<Activity>, DbErr> {
        let mut query = entity::prelude::Activity::find()
            .filter(entity::activity::Column::BoardId.eq(board_id));

        if let Some(action) = filter.action {
            query = query.filter(entity::activity::Column::Action.eq(action.as_str()));
        }
        if let Some(card_id) = filter.card_id {
            query = query.filter(entity::activity::Column::CardId.eq(card_id));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::activity::Column::UserId.eq(user_id));
        }
        if let Some(since) = filter.since {
            query = query.filter(entity::activity::Column::CreatedAt.gte(since));
        }
        if let Some(until) = filter.until {
            query = query.filter(entity::activity::Column::CreatedAt.lte(until));
        }

        self.fetch(query, filter.page).await
    }

    pub async fn get_by_card(&self, card_id: i32, page: Page) -> Result<Vec<Activity>, DbErr> {
        let query = entity::prelude::Activity::find()
            .filter(entity::activity::Column::CardId.eq(card_id));

        self.fetch(query, page).await
    }

    pub async fn get_by_user(&self, user_id: i32, page: Page) -> Result<Vec<Activity>, DbErr> {
        let query = entity::prelude::Activity::find()
            .filter(entity::activity::Column::UserId.eq(user_id));

        self.fetch(query, page).await
    }

    pub async fn count_by_board(&self, board_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Activity::find()
            .filter(entity::activity::Column::BoardId.eq(board_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_card(&self, card_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Activity::find()
            .filter(entity::activity::Column::CardId.eq(card_id))
            .count(self.db)
            .await
    }

    async fn fetch(
        &self,
        query: Select<entity::activity::Entity>,
        page: Page,
    ) -> Result<Vec<Activity>, DbErr> {
        let entities = query
            .order_by_desc(entity::activity::Column::CreatedAt)
            .order_by_desc(entity::activity::Column::Id)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        entities.into_iter().map(Activity::from_entity).collect()
    }
}
