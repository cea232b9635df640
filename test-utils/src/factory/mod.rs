//! Factory methods for inserting test data.
//!
//! Each factory module exposes a `Factory` builder for customization plus a `create_*`
//! shorthand that inserts a row with defaults. Column and card factories append to the
//! end of their container and keep the board's ordered column index in sync, so seeded
//! data already satisfies the ordering invariants the services rely on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (owner, board) = factory::helpers::create_board_with_owner(&db).await?;
//! let todo = factory::create_column(&db, board.id).await?;
//! let card = factory::create_card(&db, &todo).await?;
//!
//! let observer = factory::create_user(&db).await?;
//! factory::create_member(&db, board.id, observer.id, "observer").await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users
//! - `board` - Boards (without memberships)
//! - `board_member` - Membership rows
//! - `board_column` - Columns appended to a board
//! - `card` - Cards appended to a column
//! - `card_member` - Card assignments
//! - `helpers` - Combinations of the above

pub mod board;
pub mod board_column;
pub mod board_member;
pub mod card;
pub mod card_member;
pub mod helpers;
pub mod user;

pub use board::create_board;
pub use board_column::create_column;
pub use board_member::create_member;
pub use card::create_card;
pub use card_member::create_card_member;
pub use user::create_user;
