use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    Admin,
    Member,
    Observer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoardMemberDto {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: RoleDto,
    pub joined_at: DateTime<Utc>,
}

/// Identifies the user to add by id or by email; `user_id` wins when both are given.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddMemberDto {
    pub user_id: Option<i32>,
    pub email: Option<String>,
    /// Defaults to `member`.
    pub role: Option<RoleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateMemberRoleDto {
    pub role: RoleDto,
}
