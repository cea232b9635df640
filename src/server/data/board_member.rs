//! Board membership repository.
//!
//! At most one membership row exists per board and user, enforced by a unique index.
//! Queries that return `BoardMember` join the user row for display fields.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{member::BoardMember, permission::Role};

pub struct BoardMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Looks up the stored role of a user on a board.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - The user is a member
    /// - `Ok(None)` - No membership row
    /// - `Err(DbErr)` - Database error or unknown stored role
    pub async fn find_role(&self, board_id: i32, user_id: i32) -> Result<Option<Role>, DbErr> {
        let entity = self.find_entity(board_id, user_id).await?;

        entity.map(|member| member.role.parse()).transpose()
    }

    /// Gets a single membership with its user.
    pub async fn find(&self, board_id: i32, user_id: i32) -> Result<Option<BoardMember>, DbErr> {
        let result = entity::prelude::BoardMember::find()
            .filter(entity::board_member::Column::BoardId.eq(board_id))
            .filter(entity::board_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        match result {
            Some((member, Some(user))) => BoardMember::from_entity(member, user).map(Some),
            _ => Ok(None),
        }
    }

    /// Gets every member of a board in join order.
    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<BoardMember>, DbErr> {
        let results = entity::prelude::BoardMember::find()
            .filter(entity::board_member::Column::BoardId.eq(board_id))
            .order_by_asc(entity::board_member::Column::JoinedAt)
            .order_by_asc(entity::board_member::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        results
            .into_iter()
            .filter_map(|(member, user)| user.map(|user| (member, user)))
            .map(|(member, user)| BoardMember::from_entity(member, user))
            .collect()
    }

    /// Inserts a membership row.
    ///
    /// # Returns
    /// - `Ok(())` - Membership created
    /// - `Err(DbErr)` - Database error, including a duplicate membership
    pub async fn create(&self, board_id: i32, user_id: i32, role: Role) -> Result<(), DbErr> {
        entity::board_member::ActiveModel {
            board_id: ActiveValue::Set(board_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Changes a member's role.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No membership row
    pub async fn update_role(&self, board_id: i32, user_id: i32, role: Role) -> Result<bool, DbErr> {
        let Some(entity) = self.find_entity(board_id, user_id).await? else {
            return Ok(false);
        };

        let mut active: entity::board_member::ActiveModel = entity.into();
        active.role = ActiveValue::Set(role.as_str().to_string());
        active.update(self.db).await?;

        Ok(true)
    }

    /// Removes a membership row.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - No membership row
    pub async fn delete(&self, board_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BoardMember::delete_many()
            .filter(entity::board_member::Column::BoardId.eq(board_id))
            .filter(entity::board_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(
        &self,
        board_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::board_member::Model>, DbErr> {
        entity::prelude::BoardMember::find()
            .filter(entity::board_member::Column::BoardId.eq(board_id))
            .filter(entity::board_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
