//! Column factory for creating test columns.
//!
//! Columns are appended after the board's existing columns and their id is pushed
//! onto the board's ordered column index.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Factory for creating test columns with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let column = BoardColumnFactory::new(&db, board.id)
///     .name("Done")
///     .build()
///     .await?;
/// ```
pub struct BoardColumnFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::board_column::Model,
    position: Option<i32>,
}

impl<'a> BoardColumnFactory<'a> {
    /// Creates a new factory for a column on `board_id`.
    pub fn new(db: &'a DatabaseConnection, board_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::board_column::entity_builder()
            .board_id(board_id)
            .name(format!("Column {}", id))
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

    /// Overrides the stored position instead of appending.
    ///
    /// Useful for seeding sparse or duplicated positions.
    pub fn position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    /// Builds and inserts the column, then records it in the board's column index.
    ///
    /// # Returns
    /// - `Ok(entity::board_column::Model)` - Created column entity
    /// - `Err(DbErr)` - Database error during insert, or the board does not exist
    pub async fn build(self) -> Result<entity::board_column::Model, DbErr> {
        let board_id = self.entity.board_id;
        let position = match self.position {
            Some(position) => position,
            None => entity::prelude::BoardColumn::find()
                .filter(entity::board_column::Column::BoardId.eq(board_id))
                .count(self.db)
                .await? as i32,
        };

        let now = Utc::now();
        let column = entity::board_column::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            board_id: ActiveValue::Set(board_id),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let board = entity::prelude::Board::find_by_id(board_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Board with id {} not found",
                board_id
            )))?;

        let mut index: Vec<i32> = serde_json::from_str(&board.ordered_column_ids)
            .map_err(|e| DbErr::Custom(format!("Invalid column index: {}", e)))?;
        index.push(column.id);

        let mut active: entity::board::ActiveModel = board.into();
        active.ordered_column_ids = ActiveValue::Set(
            serde_json::to_string(&index).map_err(|e| DbErr::Custom(e.to_string()))?,
        );
        active.update(self.db).await?;

        Ok(column)
    }
}

/// Creates a column with default values at the end of `board_id`.
pub async fn create_column(
    db: &DatabaseConnection,
    board_id: i32,
) -> Result<entity::board_column::Model, DbErr> {
    BoardColumnFactory::new(db, board_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_board_with_owner};

    #[tokio::test]
    async fn appends_columns_and_tracks_index() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_board_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, board) = create_board_with_owner(db).await?;
        let first = create_column(db, board.id).await?;
        let second = create_column(db, board.id).await?;

        assert_eq!(first.position, 0);
        assert_eq!(second.position, 1);

        let board = entity::prelude::Board::find_by_id(board.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(
            board.ordered_column_ids,
            format!("[{},{}]", first.id, second.id)
        );

        Ok(())
    }
}
