use chrono::{DateTime, Utc};

use crate::{
    model::column::{ColumnDto, CreateColumnDto, MoveColumnDto, UpdateColumnDto},
    server::model::card::Card,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: i32,
    pub name: String,
    pub board_id: i32,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn from_entity(entity: entity::board_column::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            board_id: entity.board_id,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Name given to a copy of this column when none is supplied.
    pub fn copy_name(&self) -> String {
        format!("{} (Copy)", self.name)
    }

    pub fn into_dto(self) -> ColumnDto {
        ColumnDto {
            id: self.id,
            name: self.name,
            board_id: self.board_id,
            position: self.position,
            card_count: None,
            cards: None,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Column with its cards in position order.
#[derive(Debug, Clone)]
pub struct ColumnWithCards {
    pub column: Column,
    pub cards: Vec<Card>,
}

impl ColumnWithCards {
    pub fn into_dto(self) -> ColumnDto {
        let mut dto = self.column.into_dto();
        dto.cards = Some(self.cards.into_iter().map(Card::into_dto).collect());
        dto
    }
}

/// Column listing entry carrying only the number of cards.
#[derive(Debug, Clone)]
pub struct ColumnWithCount {
    pub column: Column,
    pub card_count: u64,
}

impl ColumnWithCount {
    pub fn into_dto(self) -> ColumnDto {
        let mut dto = self.column.into_dto();
        dto.card_count = Some(self.card_count);
        dto
    }
}

#[derive(Debug, Clone)]
pub struct CreateColumnParams {
    pub board_id: i32,
    pub name: String,
    pub position: Option<i32>,
}

impl CreateColumnParams {
    pub fn from_dto(board_id: i32, dto: CreateColumnDto) -> Self {
        Self {
            board_id,
            name: dto.name,
            position: dto.position,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateColumnParams {
    pub id: i32,
    pub name: Option<String>,
    pub position: Option<i32>,
}

impl UpdateColumnParams {
    pub fn from_dto(id: i32, dto: UpdateColumnDto) -> Self {
        Self {
            id,
            name: dto.name,
            position: dto.position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoveColumnParams {
    pub id: i32,
    pub target_board_id: i32,
    pub position: Option<i32>,
}

impl MoveColumnParams {
    pub fn from_dto(id: i32, dto: MoveColumnDto) -> Self {
        Self {
            id,
            target_board_id: dto.target_board_id,
            position: dto.position,
        }
    }
}
