//! Board membership factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership row for `user_id` on `board_id` with the stored `role` string.
///
/// The role is written verbatim so tests can also seed invalid values.
///
/// # Returns
/// - `Ok(entity::board_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member(
    db: &DatabaseConnection,
    board_id: i32,
    user_id: i32,
    role: &str,
) -> Result<entity::board_member::Model, DbErr> {
    entity::board_member::ActiveModel {
        board_id: ActiveValue::Set(board_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role.to_string()),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
