use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub board_id: i32,
    pub column_id: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub position: i32,
    pub is_overdue: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCardDto {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub position: Option<i32>,
}

/// Partial update; `column_id` and `position` relocate the card like a move.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCardDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
    pub column_id: Option<i32>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoveCardDto {
    pub target_column_id: i32,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DuplicateCardDto {
    pub target_column_id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArchiveCardDto {
    pub archived: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardMemberDto {
    pub card_id: i32,
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub assigned_at: DateTime<Utc>,
}

/// Identifies the board member to assign by id or by email; `user_id` wins when both are given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddCardMemberDto {
    pub user_id: Option<i32>,
    pub email: Option<String>,
}

/// Assigns several board members at once, by ids or else by emails.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BatchAddCardMembersDto {
    #[serde(default)]
    pub user_ids: Vec<i32>,
    #[serde(default)]
    pub emails: Vec<String>,
}
