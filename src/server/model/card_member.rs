use chrono::{DateTime, Utc};

use crate::{
    model::card::{AddCardMemberDto, BatchAddCardMembersDto, CardMemberDto},
    server::{error::AppError, model::member::MemberTarget},
};

/// A board member assigned to a card, joined with their user record.
#[derive(Debug, Clone, PartialEq)]
pub struct CardMember {
    pub card_id: i32,
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub assigned_at: DateTime<Utc>,
}

impl CardMember {
    pub fn from_entity(member: entity::card_member::Model, user: entity::user::Model) -> Self {
        Self {
            card_id: member.card_id,
            user_id: member.user_id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            assigned_at: member.assigned_at,
        }
    }

    pub fn into_dto(self) -> CardMemberDto {
        CardMemberDto {
            card_id: self.card_id,
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            assigned_at: self.assigned_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddCardMemberParams {
    pub card_id: i32,
    pub target: MemberTarget,
}

impl AddCardMemberParams {
    /// # Returns
    /// - `Ok(AddCardMemberParams)` - Target resolved
    /// - `Err(AppError::BadRequest)` - Neither a user id nor an email was given
    pub fn from_dto(card_id: i32, dto: AddCardMemberDto) -> Result<Self, AppError> {
        let target = match (dto.user_id, dto.email) {
            (Some(user_id), _) => MemberTarget::UserId(user_id),
            (None, Some(email)) => MemberTarget::Email(email),
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Either user_id or email is required".to_string(),
                ))
            }
        };

        Ok(Self { card_id, target })
    }
}

#[derive(Debug, Clone)]
pub struct BatchAddCardMembersParams {
    pub card_id: i32,
    pub targets: Vec<MemberTarget>,
}

impl BatchAddCardMembersParams {
    /// Uses `user_ids` when it is non-empty, otherwise `emails`.
    ///
    /// # Returns
    /// - `Ok(BatchAddCardMembersParams)` - At least one target
    /// - `Err(AppError::BadRequest)` - Both lists are empty
    pub fn from_dto(card_id: i32, dto: BatchAddCardMembersDto) -> Result<Self, AppError> {
        let targets: Vec<MemberTarget> = if !dto.user_ids.is_empty() {
            dto.user_ids.into_iter().map(MemberTarget::UserId).collect()
        } else if !dto.emails.is_empty() {
            dto.emails.into_iter().map(MemberTarget::Email).collect()
        } else {
            return Err(AppError::BadRequest(
                "Either user_ids or emails is required".to_string(),
            ));
        };

        Ok(Self { card_id, targets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_prefers_user_ids() {
        let dto = BatchAddCardMembersDto {
            user_ids: vec![3, 4],
            emails: vec!["ignored@example.com".to_string()],
        };

        let params = BatchAddCardMembersParams::from_dto(1, dto).unwrap();

        assert_eq!(
            params.targets,
            vec![MemberTarget::UserId(3), MemberTarget::UserId(4)]
        );
    }

    #[test]
    fn batch_requires_a_target() {
        let result = BatchAddCardMembersParams::from_dto(1, BatchAddCardMembersDto::default());

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
