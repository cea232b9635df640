//! Board factory for creating test board entities.
//!
//! Boards are inserted without any membership rows; use
//! `helpers::create_board_with_owner` when the owner's admin membership is needed.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boards with customizable fields.
///
/// Defaults are sourced from `fixture::board`.
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::board::Model,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory for the given owner.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - User owning the board
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::board::entity_builder()
            .owner_id(owner_id)
            .name(format!("Board {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.entity.visibility = visibility.into();
        self
    }

    /// Builds and inserts the board entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::board::Model)` - Created board entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        let now = Utc::now();
        entity::board::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            owner_id: ActiveValue::Set(self.entity.owner_id),
            visibility: ActiveValue::Set(self.entity.visibility),
            background_color: ActiveValue::Set(self.entity.background_color),
            ordered_column_ids: ActiveValue::Set(self.entity.ordered_column_ids),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board with default values owned by `owner_id`.
///
/// Shorthand for `BoardFactory::new(db, owner_id).build().await`.
pub async fn create_board(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db, owner_id).build().await
}
