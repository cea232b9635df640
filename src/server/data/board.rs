//! Board data repository.
//!
//! Besides board CRUD, this repository maintains the board's cached column order. The
//! ordering engine rewrites it whenever it renumbers a board's columns, and appends go
//! through `push_column_id`.

use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::board::{
    parse_column_index, serialize_column_index, Board, CreateBoardParams, UpdateBoardParams,
};

pub struct BoardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a board with an empty column order.
    ///
    /// # Returns
    /// - `Ok(Board)` - The created board
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, DbErr> {
        let now = Utc::now();
        let entity = entity::board::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            owner_id: ActiveValue::Set(params.owner_id),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            background_color: ActiveValue::Set(params.background_color),
            ordered_column_ids: ActiveValue::Set(serialize_column_index(&[])?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Board::from_entity(entity)
    }

    pub async fn find_by_id(&self, board_id: i32) -> Result<Option<Board>, DbErr> {
        let entity = entity::prelude::Board::find_by_id(board_id)
            .one(self.db)
            .await?;

        entity.map(Board::from_entity).transpose()
    }

    /// Whether `user_id` owns the board. Ownership is never stored as a membership row.
    pub async fn is_owner(&self, board_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Board::find()
            .filter(entity::board::Column::Id.eq(board_id))
            .filter(entity::board::Column::OwnerId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every board the user owns or belongs to, most recently updated first.
    ///
    /// # Arguments
    /// - `user_id` - User whose boards to list
    ///
    /// # Returns
    /// - `Ok(Vec<Board>)` - Owned boards and boards with a membership row for the user
    /// - `Err(DbErr)` - Database error or malformed stored board
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Board>, DbErr> {
        let member_boards = Query::select()
            .column(entity::board_member::Column::BoardId)
            .from(entity::board_member::Entity)
            .and_where(entity::board_member::Column::UserId.eq(user_id))
            .to_owned();

        let entities = entity::prelude::Board::find()
            .filter(
                Condition::any()
                    .add(entity::board::Column::OwnerId.eq(user_id))
                    .add(entity::board::Column::Id.in_subquery(member_boards)),
            )
            .order_by_desc(entity::board::Column::UpdatedAt)
            .order_by_desc(entity::board::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Board::from_entity).collect()
    }

    /// Applies settings changes, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Board))` - The updated board
    /// - `Ok(None)` - No board with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateBoardParams) -> Result<Option<Board>, DbErr> {
        let Some(entity) = entity::prelude::Board::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::board::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(visibility) = params.visibility {
            active.visibility = ActiveValue::Set(visibility.as_str().to_string());
        }
        if let Some(color) = params.background_color {
            active.background_color = ActiveValue::Set(Some(color));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Board::from_entity(entity).map(Some)
    }

    /// Deletes a board. Members, columns and cards go with it.
    ///
    /// # Returns
    /// - `Ok(true)` - Board deleted
    /// - `Ok(false)` - No board with that id
    pub async fn delete(&self, board_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Board::delete_by_id(board_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the board's cached column order.
    ///
    /// # Returns
    /// - `Ok(())` - Order stored
    /// - `Err(DbErr::RecordNotFound)` - No board with that id
    pub async fn set_column_order(&self, board_id: i32, column_ids: &[i32]) -> Result<(), DbErr> {
        let entity = self.find_entity(board_id).await?;

        let mut active: entity::board::ActiveModel = entity.into();
        active.ordered_column_ids = ActiveValue::Set(serialize_column_index(column_ids)?);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    /// Appends a column id to the board's cached column order.
    ///
    /// Ids already present are moved to the end rather than repeated.
    pub async fn push_column_id(&self, board_id: i32, column_id: i32) -> Result<(), DbErr> {
        let entity = self.find_entity(board_id).await?;

        let mut order = parse_column_index(&entity.ordered_column_ids)?;
        order.retain(|id| *id != column_id);
        order.push(column_id);

        let mut active: entity::board::ActiveModel = entity.into();
        active.ordered_column_ids = ActiveValue::Set(serialize_column_index(&order)?);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    async fn find_entity(&self, board_id: i32) -> Result<entity::board::Model, DbErr> {
        entity::prelude::Board::find_by_id(board_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Board with id {} not found", board_id)))
    }
}
