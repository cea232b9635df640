//! Card factory for creating test cards.
//!
//! Cards take their `board_id` from the column they are created in and are appended
//! after the column's existing cards.

use crate::{factory::helpers::next_id, fixture};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Factory for creating test cards with customizable fields.
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::card::Model,
    position: Option<i32>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new factory for a card in `column`.
    pub fn new(db: &'a DatabaseConnection, column: &entity::board_column::Model) -> Self {
        let id = next_id();
        let entity = fixture::card::entity_builder()
            .board_id(column.board_id)
            .column_id(column.id)
            .name(format!("Card {}", id))
            .build();

        Self {
            db,
            entity,
            position: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    pub fn due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.entity.due_date = due_date;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.entity.completed = completed;
        self.entity.completed_at = completed.then(Utc::now);
        self
    }

    /// Overrides the stored position instead of appending.
    pub fn position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        let position = match self.position {
            Some(position) => position,
            None => entity::prelude::Card::find()
                .filter(entity::card::Column::ColumnId.eq(self.entity.column_id))
                .count(self.db)
                .await? as i32,
        };

        let now = Utc::now();
        entity::card::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            board_id: ActiveValue::Set(self.entity.board_id),
            column_id: ActiveValue::Set(self.entity.column_id),
            due_date: ActiveValue::Set(self.entity.due_date),
            completed: ActiveValue::Set(self.entity.completed),
            completed_at: ActiveValue::Set(self.entity.completed_at),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with default values at the end of `column`.
pub async fn create_card(
    db: &DatabaseConnection,
    column: &entity::board_column::Model,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, column).build().await
}
