//! Column data repository.
//!
//! Columns are ordered within their board by `position`. Position writes here are raw;
//! keeping positions dense and the board's column order in sync is the ordering
//! engine's job.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    column::{Column, ColumnWithCount},
    position::Sibling,
};

pub struct BoardColumnRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardColumnRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a column at the given position.
    pub async fn create(&self, board_id: i32, name: String, position: i32) -> Result<Column, DbErr> {
        let now = Utc::now();
        let entity = entity::board_column::ActiveModel {
            name: ActiveValue::Set(name),
            board_id: ActiveValue::Set(board_id),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Column::from_entity(entity))
    }

    pub async fn find_by_id(&self, column_id: i32) -> Result<Option<Column>, DbErr> {
        let entity = entity::prelude::BoardColumn::find_by_id(column_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Column::from_entity))
    }

    /// Gets a board's columns in position order.
    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<Column>, DbErr> {
        let entities = entity::prelude::BoardColumn::find()
            .filter(entity::board_column::Column::BoardId.eq(board_id))
            .order_by_asc(entity::board_column::Column::Position)
            .order_by_asc(entity::board_column::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Column::from_entity).collect())
    }

    /// Gets a board's columns in position order with the number of cards in each.
    pub async fn get_with_card_counts(&self, board_id: i32) -> Result<Vec<ColumnWithCount>, DbErr> {
        let columns = self.get_by_board(board_id).await?;

        let mut results = Vec::with_capacity(columns.len());
        for column in columns {
            let card_count = entity::prelude::Card::find()
                .filter(entity::card::Column::ColumnId.eq(column.id))
                .count(self.db)
                .await?;

            results.push(ColumnWithCount { column, card_count });
        }

        Ok(results)
    }

    /// Renames a column.
    ///
    /// # Returns
    /// - `Ok(Some(Column))` - The renamed column
    /// - `Ok(None)` - No column with that id
    pub async fn update_name(&self, column_id: i32, name: String) -> Result<Option<Column>, DbErr> {
        let Some(entity) = entity::prelude::BoardColumn::find_by_id(column_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::board_column::ActiveModel = entity.into();
        active.name = ActiveValue::Set(name);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Column::from_entity(entity)))
    }

    /// Reassigns a column to another board at the given position.
    pub async fn set_board(&self, column_id: i32, board_id: i32, position: i32) -> Result<(), DbErr> {
        entity::prelude::BoardColumn::update_many()
            .col_expr(entity::board_column::Column::BoardId, Expr::value(board_id))
            .col_expr(entity::board_column::Column::Position, Expr::value(position))
            .col_expr(entity::board_column::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::board_column::Column::Id.eq(column_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a column. Its cards go with it.
    pub async fn delete(&self, column_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BoardColumn::delete_by_id(column_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the ids and stored positions of a board's columns, sorted by position.
    pub async fn positions(&self, board_id: i32) -> Result<Vec<Sibling>, DbErr> {
        let columns = self.get_by_board(board_id).await?;

        Ok(columns
            .iter()
            .map(|column| Sibling::new(column.id, column.position))
            .collect())
    }

    pub async fn set_position(&self, column_id: i32, position: i32) -> Result<(), DbErr> {
        entity::prelude::BoardColumn::update_many()
            .col_expr(entity::board_column::Column::Position, Expr::value(position))
            .col_expr(entity::board_column::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::board_column::Column::Id.eq(column_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Highest stored position on a board, `None` when it has no columns.
    pub async fn max_position(&self, board_id: i32) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::BoardColumn::find()
            .filter(entity::board_column::Column::BoardId.eq(board_id))
            .order_by_desc(entity::board_column::Column::Position)
            .one(self.db)
            .await?;

        Ok(last.map(|column| column.position))
    }
}
