//! Board domain models and parameters.
//!
//! A board owns an ordered list of columns. Besides the authoritative `position` values
//! on each column, the board row caches that order as a JSON array so clients can render
//! the board without sorting; repositories keep the two in step.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::str::FromStr;

use crate::{
    model::board::{BoardDetailsDto, BoardDto, CreateBoardDto, UpdateBoardDto, VisibilityDto},
    server::model::{column::ColumnWithCards, member::BoardMember, permission::EffectiveRole},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Private,
    Workspace,
    Public,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Workspace => "workspace",
            Visibility::Public => "public",
        }
    }

    pub fn from_dto(dto: VisibilityDto) -> Self {
        match dto {
            VisibilityDto::Private => Visibility::Private,
            VisibilityDto::Workspace => Visibility::Workspace,
            VisibilityDto::Public => Visibility::Public,
        }
    }

    pub fn into_dto(self) -> VisibilityDto {
        match self {
            Visibility::Private => VisibilityDto::Private,
            Visibility::Workspace => VisibilityDto::Workspace,
            Visibility::Public => VisibilityDto::Public,
        }
    }
}

impl FromStr for Visibility {
    type Err = DbErr;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "private" => Ok(Visibility::Private),
            "workspace" => Ok(Visibility::Workspace),
            "public" => Ok(Visibility::Public),
            other => Err(DbErr::Custom(format!("Unknown board visibility '{}'", other))),
        }
    }
}

/// Parses the board's cached column order.
///
/// # Returns
/// - `Ok(Vec<i32>)` - Column ids in display order
/// - `Err(DbErr::Custom)` - The stored text is not a JSON array of ids
pub fn parse_column_index(raw: &str) -> Result<Vec<i32>, DbErr> {
    serde_json::from_str(raw)
        .map_err(|e| DbErr::Custom(format!("Failed to parse ordered column ids: {}", e)))
}

/// Serializes a column order for storage on the board row.
pub fn serialize_column_index(ids: &[i32]) -> Result<String, DbErr> {
    serde_json::to_string(ids)
        .map_err(|e| DbErr::Custom(format!("Failed to serialize ordered column ids: {}", e)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub visibility: Visibility,
    pub background_color: Option<String>,
    pub ordered_column_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Board)` - Converted board
    /// - `Err(DbErr::Custom)` - Stored visibility or column index is malformed
    pub fn from_entity(entity: entity::board::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            owner_id: entity.owner_id,
            visibility: entity.visibility.parse()?,
            background_color: entity.background_color,
            ordered_column_ids: parse_column_index(&entity.ordered_column_ids)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.owner_id == user_id
    }

    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.id,
            name: self.name,
            description: self.description,
            owner_id: self.owner_id,
            visibility: self.visibility.into_dto(),
            background_color: self.background_color,
            ordered_column_ids: self.ordered_column_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Board with its members and columns, as seen by one user.
#[derive(Debug, Clone)]
pub struct BoardDetails {
    pub board: Board,
    pub role: EffectiveRole,
    pub members: Vec<BoardMember>,
    pub columns: Vec<ColumnWithCards>,
}

impl BoardDetails {
    pub fn into_dto(self) -> BoardDetailsDto {
        BoardDetailsDto {
            role: self.role.as_role().into_dto(),
            is_owner: self.role == EffectiveRole::Owner,
            board: self.board.into_dto(),
            members: self.members.into_iter().map(BoardMember::into_dto).collect(),
            columns: self
                .columns
                .into_iter()
                .map(ColumnWithCards::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBoardParams {
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub visibility: Visibility,
    pub background_color: Option<String>,
}

impl CreateBoardParams {
    pub fn from_dto(owner_id: i32, dto: CreateBoardDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            visibility: dto.visibility.map(Visibility::from_dto).unwrap_or_default(),
            background_color: dto.background_color,
        }
    }
}

/// Settings changes; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBoardParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<Visibility>,
    pub background_color: Option<String>,
}

impl UpdateBoardParams {
    pub fn from_dto(id: i32, dto: UpdateBoardDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            visibility: dto.visibility.map(Visibility::from_dto),
            background_color: dto.background_color,
        }
    }
}
