use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::member::{AddMemberDto, BoardMemberDto},
    server::{error::AppError, model::permission::Role},
};

/// Membership row joined with the member's user record.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardMember {
    pub board_id: i32,
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

impl BoardMember {
    /// Converts a membership and its user to a domain model.
    ///
    /// # Returns
    /// - `Ok(BoardMember)` - Converted member
    /// - `Err(DbErr::Custom)` - The stored role is not one of the known roles
    pub fn from_entity(
        member: entity::board_member::Model,
        user: entity::user::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            board_id: member.board_id,
            user_id: member.user_id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            role: member.role.parse()?,
            joined_at: member.joined_at,
        })
    }

    pub fn into_dto(self) -> BoardMemberDto {
        BoardMemberDto {
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            role: self.role.into_dto(),
            joined_at: self.joined_at,
        }
    }
}

/// How the user being added is identified.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberTarget {
    UserId(i32),
    Email(String),
}

#[derive(Debug, Clone)]
pub struct AddMemberParams {
    pub board_id: i32,
    pub target: MemberTarget,
    pub role: Role,
}

impl AddMemberParams {
    /// Builds params from the request body.
    ///
    /// # Returns
    /// - `Ok(AddMemberParams)` - Target resolved; role defaults to `member`
    /// - `Err(AppError::BadRequest)` - Neither a user id nor an email was given
    pub fn from_dto(board_id: i32, dto: AddMemberDto) -> Result<Self, AppError> {
        let target = match (dto.user_id, dto.email) {
            (Some(user_id), _) => MemberTarget::UserId(user_id),
            (None, Some(email)) => MemberTarget::Email(email),
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Either user_id or email is required".to_string(),
                ))
            }
        };

        Ok(Self {
            board_id,
            target,
            role: dto.role.map(Role::from_dto).unwrap_or(Role::Member),
        })
    }
}
