use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{column::ColumnDto, member::{BoardMemberDto, RoleDto}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityDto {
    Private,
    Workspace,
    Public,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoardDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub visibility: VisibilityDto,
    pub background_color: Option<String>,
    pub ordered_column_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A board with everything needed to render it for the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoardDetailsDto {
    pub board: BoardDto,
    /// The caller's role; owners are reported as `admin`.
    pub role: RoleDto,
    pub is_owner: bool,
    pub members: Vec<BoardMemberDto>,
    pub columns: Vec<ColumnDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBoardDto {
    pub name: String,
    pub description: Option<String>,
    pub visibility: Option<VisibilityDto>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBoardDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<VisibilityDto>,
    pub background_color: Option<String>,
}
