//! Board activity log entries.
//!
//! Every mutation of a board's structure or membership records one entry in the same
//! transaction as the change itself. `details` is a free-form JSON object whose keys
//! depend on the action.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde_json::Value;

use crate::{
    model::activity::{ActivityDto, ActivityQueryDto, PageQueryDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityAction {
    CardCreated,
    CardUpdated,
    CardDeleted,
    CardMoved,
    CardArchived,
    CardRestored,
    CardAssigned,
    CardUnassigned,
    CardsReordered,
    ColumnCreated,
    ColumnUpdated,
    ColumnDeleted,
    ColumnMoved,
    ColumnsReordered,
    MemberAdded,
    MemberRemoved,
    MemberRoleUpdated,
}

impl ActivityAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CardCreated => "card_created",
            Self::CardUpdated => "card_updated",
            Self::CardDeleted => "card_deleted",
            Self::CardMoved => "card_moved",
            Self::CardArchived => "card_archived",
            Self::CardRestored => "card_restored",
            Self::CardAssigned => "card_assigned",
            Self::CardUnassigned => "card_unassigned",
            Self::CardsReordered => "cards_reordered",
            Self::ColumnCreated => "column_created",
            Self::ColumnUpdated => "column_updated",
            Self::ColumnDeleted => "column_deleted",
            Self::ColumnMoved => "column_moved",
            Self::ColumnsReordered => "columns_reordered",
            Self::MemberAdded => "member_added",
            Self::MemberRemoved => "member_removed",
            Self::MemberRoleUpdated => "member_role_updated",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityAction {
    type Err = DbErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = match s {
            "card_created" => Self::CardCreated,
            "card_updated" => Self::CardUpdated,
            "card_deleted" => Self::CardDeleted,
            "card_moved" => Self::CardMoved,
            "card_archived" => Self::CardArchived,
            "card_restored" => Self::CardRestored,
            "card_assigned" => Self::CardAssigned,
            "card_unassigned" => Self::CardUnassigned,
            "cards_reordered" => Self::CardsReordered,
            "column_created" => Self::ColumnCreated,
            "column_updated" => Self::ColumnUpdated,
            "column_deleted" => Self::ColumnDeleted,
            "column_moved" => Self::ColumnMoved,
            "columns_reordered" => Self::ColumnsReordered,
            "member_added" => Self::MemberAdded,
            "member_removed" => Self::MemberRemoved,
            "member_role_updated" => Self::MemberRoleUpdated,
            other => return Err(DbErr::Custom(format!("Unknown activity action: {other}"))),
        };

        Ok(action)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub board_id: i32,
    pub card_id: Option<i32>,
    pub user_id: i32,
    pub action: ActivityAction,
    pub details: Value,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Converts a stored entry.
    ///
    /// # Returns
    /// - `Ok(Activity)` - Converted entry
    /// - `Err(DbErr::Custom)` - Unknown action or details that are not valid JSON
    pub fn from_entity(entity: entity::activity::Model) -> Result<Self, DbErr> {
        let details = serde_json::from_str(&entity.details)
            .map_err(|e| DbErr::Custom(format!("Invalid activity details: {e}")))?;

        Ok(Self {
            id: entity.id,
            board_id: entity.board_id,
            card_id: entity.card_id,
            user_id: entity.user_id,
            action: entity.action.parse()?,
            details,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            board_id: self.board_id,
            card_id: self.card_id,
            user_id: self.user_id,
            action: self.action.as_str().to_string(),
            details: self.details,
            created_at: self.created_at,
        }
    }
}

/// An entry about to be recorded.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub board_id: i32,
    pub card_id: Option<i32>,
    pub user_id: i32,
    pub action: ActivityAction,
    pub details: Value,
}

impl NewActivity {
    pub fn board(board_id: i32, user_id: i32, action: ActivityAction, details: Value) -> Self {
        Self {
            board_id,
            card_id: None,
            user_id,
            action,
            details,
        }
    }

    pub fn card(
        board_id: i32,
        card_id: i32,
        user_id: i32,
        action: ActivityAction,
        details: Value,
    ) -> Self {
        Self {
            board_id,
            card_id: Some(card_id),
            user_id,
            action,
            details,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Page {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Page {
    pub fn from_dto(dto: PageQueryDto) -> Self {
        Self {
            limit: dto.limit,
            offset: dto.offset,
        }
    }
}

/// Narrows a board's feed; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub action: Option<ActivityAction>,
    pub card_id: Option<i32>,
    pub user_id: Option<i32>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    pub page: Page,
}

impl ActivityFilter {
    /// Builds a filter from query parameters.
    ///
    /// # Returns
    /// - `Ok(ActivityFilter)` - Parsed filter
    /// - `Err(AppError::BadRequest)` - `action` is not a known action name
    pub fn from_dto(dto: ActivityQueryDto) -> Result<Self, AppError> {
        let action = dto
            .action
            .map(|name| {
                name.parse::<ActivityAction>()
                    .map_err(|_| AppError::BadRequest(format!("Unknown activity action: {name}")))
            })
            .transpose()?;

        Ok(Self {
            action,
            card_id: dto.card_id,
            user_id: dto.user_id,
            since: dto.start_date,
            until: dto.end_date,
            page: Page {
                limit: dto.limit,
                offset: dto.offset,
            },
        })
    }
}
