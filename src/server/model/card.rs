use chrono::{DateTime, Utc};

use crate::model::card::{CardDto, CreateCardDto, DuplicateCardDto, MoveCardDto, UpdateCardDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub board_id: i32,
    pub column_id: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            board_id: entity.board_id,
            column_id: entity.column_id,
            due_date: entity.due_date,
            completed: entity.completed,
            completed_at: entity.completed_at,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Open cards whose due date has passed.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }

    pub fn copy_name(&self) -> String {
        format!("{} (Copy)", self.name)
    }

    pub fn into_dto(self) -> CardDto {
        let is_overdue = self.is_overdue_at(Utc::now());

        CardDto {
            id: self.id,
            name: self.name,
            description: self.description,
            board_id: self.board_id,
            column_id: self.column_id,
            due_date: self.due_date,
            completed: self.completed,
            completed_at: self.completed_at,
            position: self.position,
            is_overdue,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fully resolved card row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub board_id: i32,
    pub column_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct CreateCardParams {
    pub column_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub position: Option<i32>,
}

impl CreateCardParams {
    pub fn from_dto(column_id: i32, dto: CreateCardDto) -> Self {
        Self {
            column_id,
            name: dto.name,
            description: dto.description,
            due_date: dto.due_date,
            position: dto.position,
        }
    }
}

/// Field changes plus an optional relocation.
#[derive(Debug, Clone, Default)]
pub struct UpdateCardParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
    pub column_id: Option<i32>,
    pub position: Option<i32>,
}

impl UpdateCardParams {
    pub fn from_dto(id: i32, dto: UpdateCardDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            due_date: dto.due_date,
            completed: dto.completed,
            column_id: dto.column_id,
            position: dto.position,
        }
    }

    /// Whether the update relocates the card.
    pub fn relocates(&self) -> bool {
        self.column_id.is_some() || self.position.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct MoveCardParams {
    pub id: i32,
    pub target_column_id: i32,
    pub position: Option<i32>,
}

impl MoveCardParams {
    pub fn from_dto(id: i32, dto: MoveCardDto) -> Self {
        Self {
            id,
            target_column_id: dto.target_column_id,
            position: dto.position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DuplicateCardParams {
    pub id: i32,
    pub target_column_id: Option<i32>,
    pub name: Option<String>,
}

impl DuplicateCardParams {
    pub fn from_dto(id: i32, dto: DuplicateCardDto) -> Self {
        Self {
            id,
            target_column_id: dto.target_column_id,
            name: dto.name,
        }
    }
}
