//! Shared helper utilities for factory methods.
//!
//! Provides the unique ID counter used by every factory plus shortcuts for common
//! combinations of boards, columns and cards.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a board they own, together with the owner's admin membership.
///
/// This mirrors what board creation does in the service layer.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, board))` - The owning user and the new board
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::board::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let board = crate::factory::board::create_board(db, owner.id).await?;
    crate::factory::board_member::create_member(db, board.id, owner.id, "admin").await?;

    Ok((owner, board))
}

/// Creates a user with the given role on an existing board.
///
/// # Arguments
/// - `db` - Database connection
/// - `board_id` - Board to join
/// - `role` - Stored role string (`admin`, `member` or `observer`)
///
/// # Returns
/// - `Ok(user)` - The new member
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    board_id: i32,
    role: &str,
) -> Result<entity::user::Model, DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    crate::factory::board_member::create_member(db, board_id, user.id, role).await?;

    Ok(user)
}

/// Creates a column at the end of a board and fills it with `count` cards.
///
/// Cards are named `"{column name} card {n}"` and occupy positions `0..count`.
///
/// # Arguments
/// - `db` - Database connection
/// - `board_id` - Board receiving the column
/// - `count` - Number of cards to create
///
/// # Returns
/// - `Ok((column, cards))` - The column and its cards in position order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_column_with_cards(
    db: &DatabaseConnection,
    board_id: i32,
    count: usize,
) -> Result<(entity::board_column::Model, Vec<entity::card::Model>), DbErr> {
    let column = crate::factory::board_column::create_column(db, board_id).await?;

    let mut cards = Vec::with_capacity(count);
    for n in 0..count {
        let card = crate::factory::card::CardFactory::new(db, &column)
            .name(format!("{} card {}", column.name, n))
            .build()
            .await?;
        cards.push(card);
    }

    Ok((column, cards))
}
