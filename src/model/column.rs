use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::card::CardDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColumnDto {
    pub id: i32,
    pub name: String,
    pub board_id: i32,
    pub position: i32,
    /// Present when cards were not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_count: Option<u64>,
    /// Cards in position order, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<CardDto>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateColumnDto {
    pub name: String,
    /// Index to insert at; appended when omitted.
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateColumnDto {
    pub name: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoveColumnDto {
    pub target_board_id: i32,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DuplicateColumnDto {
    /// Defaults to `"<name> (Copy)"`.
    pub name: Option<String>,
}
