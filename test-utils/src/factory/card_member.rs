//! Card assignment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns `user_id` to `card_id`.
///
/// No board membership check is made, so tests can seed assignments the services would
/// refuse.
///
/// # Returns
/// - `Ok(entity::card_member::Model)` - Created assignment
/// - `Err(DbErr)` - Database error during insert
pub async fn create_card_member(
    db: &DatabaseConnection,
    card_id: i32,
    user_id: i32,
) -> Result<entity::card_member::Model, DbErr> {
    entity::card_member::ActiveModel {
        card_id: ActiveValue::Set(card_id),
        user_id: ActiveValue::Set(user_id),
        assigned_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
