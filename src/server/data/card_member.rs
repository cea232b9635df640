//! Card assignment repository.
//!
//! At most one assignment exists per card and user, enforced by a unique index.

use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::card_member::CardMember;

pub struct CardMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a card's assignees in assignment order.
    pub async fn get_by_card(&self, card_id: i32) -> Result<Vec<CardMember>, DbErr> {
        let results = entity::prelude::CardMember::find()
            .filter(entity::card_member::Column::CardId.eq(card_id))
            .order_by_asc(entity::card_member::Column::AssignedAt)
            .order_by_asc(entity::card_member::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .filter_map(|(member, user)| user.map(|user| CardMember::from_entity(member, user)))
            .collect())
    }

    pub async fn find(&self, card_id: i32, user_id: i32) -> Result<Option<CardMember>, DbErr> {
        let result = entity::prelude::CardMember::find()
            .filter(entity::card_member::Column::CardId.eq(card_id))
            .filter(entity::card_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(match result {
            Some((member, Some(user))) => Some(CardMember::from_entity(member, user)),
            _ => None,
        })
    }

    /// Ids of the users assigned to a card.
    pub async fn user_ids(&self, card_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::CardMember::find()
            .select_only()
            .column(entity::card_member::Column::UserId)
            .filter(entity::card_member::Column::CardId.eq(card_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Inserts an assignment.
    ///
    /// # Returns
    /// - `Ok(())` - Assignment created
    /// - `Err(DbErr)` - Database error, including a duplicate assignment
    pub async fn create(&self, card_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::card_member::ActiveModel {
            card_id: ActiveValue::Set(card_id),
            user_id: ActiveValue::Set(user_id),
            assigned_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// # Returns
    /// - `Ok(true)` - Assignment removed
    /// - `Ok(false)` - The user was not assigned
    pub async fn delete(&self, card_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CardMember::delete_many()
            .filter(entity::card_member::Column::CardId.eq(card_id))
            .filter(entity::card_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every assignment of `user_id` to cards of `board_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of assignments removed
    pub async fn delete_for_board_user(&self, board_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let board_cards = Query::select()
            .column(entity::card::Column::Id)
            .from(entity::card::Entity)
            .and_where(entity::card::Column::BoardId.eq(board_id))
            .to_owned();

        let result = entity::prelude::CardMember::delete_many()
            .filter(entity::card_member::Column::UserId.eq(user_id))
            .filter(entity::card_member::Column::CardId.in_subquery(board_cards))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
