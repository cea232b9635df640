//! Card data repository.
//!
//! Cards are ordered within their column by `position` and carry a copy of the column's
//! `board_id`. `set_board_for_column` is the only way that copy changes, so it moves
//! together with the column.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    card::{Card, NewCard, UpdateCardParams},
    position::Sibling,
};

pub struct CardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fully resolved card row.
    ///
    /// # Returns
    /// - `Ok(Card)` - The created card
    /// - `Err(DbErr)` - Database error, including a missing column or board
    pub async fn create(&self, card: NewCard) -> Result<Card, DbErr> {
        let now = Utc::now();
        let entity = entity::card::ActiveModel {
            name: ActiveValue::Set(card.name),
            description: ActiveValue::Set(card.description),
            board_id: ActiveValue::Set(card.board_id),
            column_id: ActiveValue::Set(card.column_id),
            due_date: ActiveValue::Set(card.due_date),
            completed: ActiveValue::Set(card.completed),
            completed_at: ActiveValue::Set(card.completed_at),
            position: ActiveValue::Set(card.position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Card::from_entity(entity))
    }

    pub async fn find_by_id(&self, card_id: i32) -> Result<Option<Card>, DbErr> {
        let entity = entity::prelude::Card::find_by_id(card_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Card::from_entity))
    }

    /// Gets a column's cards in position order.
    pub async fn get_by_column(&self, column_id: i32) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::Card::find()
            .filter(entity::card::Column::ColumnId.eq(column_id))
            .order_by_asc(entity::card::Column::Position)
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    /// Gets every card on a board, grouped by column and in position order within each.
    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::Card::find()
            .filter(entity::card::Column::BoardId.eq(board_id))
            .order_by_asc(entity::card::Column::ColumnId)
            .order_by_asc(entity::card::Column::Position)
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    /// Applies field changes. Relocation fields in `params` are ignored here.
    ///
    /// Completing a card stamps `completed_at`; reopening it clears the stamp.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - The updated card
    /// - `Ok(None)` - No card with that id
    pub async fn update(&self, params: &UpdateCardParams) -> Result<Option<Card>, DbErr> {
        let Some(entity) = entity::prelude::Card::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let was_completed = entity.completed;
        let mut active: entity::card::ActiveModel = entity.into();
        if let Some(name) = &params.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(description) = &params.description {
            active.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(due_date) = params.due_date {
            active.due_date = ActiveValue::Set(Some(due_date));
        }
        if let Some(completed) = params.completed {
            if completed != was_completed {
                active.completed = ActiveValue::Set(completed);
                active.completed_at = ActiveValue::Set(completed.then(Utc::now));
            }
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Card::from_entity(entity)))
    }

    /// Sets the completion flag, stamping or clearing `completed_at`.
    pub async fn set_completed(&self, card_id: i32, completed: bool) -> Result<Option<Card>, DbErr> {
        let Some(entity) = entity::prelude::Card::find_by_id(card_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::card::ActiveModel = entity.into();
        active.completed = ActiveValue::Set(completed);
        active.completed_at = ActiveValue::Set(completed.then(Utc::now));
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Card::from_entity(entity)))
    }

    /// Moves a card into another column of the same board at the given position.
    pub async fn set_column(&self, card_id: i32, column_id: i32, position: i32) -> Result<(), DbErr> {
        entity::prelude::Card::update_many()
            .col_expr(entity::card::Column::ColumnId, Expr::value(column_id))
            .col_expr(entity::card::Column::Position, Expr::value(position))
            .col_expr(entity::card::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::card::Column::Id.eq(card_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Rewrites the board of every card in a column.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cards updated
    pub async fn set_board_for_column(&self, column_id: i32, board_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Card::update_many()
            .col_expr(entity::card::Column::BoardId, Expr::value(board_id))
            .col_expr(entity::card::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::card::Column::ColumnId.eq(column_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, card_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Card::delete_by_id(card_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the ids and stored positions of a column's cards, sorted by position.
    pub async fn positions(&self, column_id: i32) -> Result<Vec<Sibling>, DbErr> {
        let cards = self.get_by_column(column_id).await?;

        Ok(cards
            .iter()
            .map(|card| Sibling::new(card.id, card.position))
            .collect())
    }

    pub async fn set_position(&self, card_id: i32, position: i32) -> Result<(), DbErr> {
        entity::prelude::Card::update_many()
            .col_expr(entity::card::Column::Position, Expr::value(position))
            .col_expr(entity::card::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::card::Column::Id.eq(card_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Highest stored position in a column, `None` when it is empty.
    pub async fn max_position(&self, column_id: i32) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::Card::find()
            .filter(entity::card::Column::ColumnId.eq(column_id))
            .order_by_desc(entity::card::Column::Position)
            .one(self.db)
            .await?;

        Ok(last.map(|card| card.position))
    }
}
