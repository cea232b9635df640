//! In-memory entity models for tests.
//!
//! Fixtures build entity models without inserting them. Factories use them as their
//! defaults, and unit tests can use them directly to exercise conversions.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let board = fixture::board::entity();
//! let column = fixture::board_column::entity_builder()
//!     .board_id(board.id)
//!     .position(3)
//!     .build();
//! ```

pub mod board;
pub mod board_column;
pub mod card;
pub mod user;

pub use board::{entity as board_entity, entity_builder as board_entity_builder};
pub use board_column::{entity as board_column_entity, entity_builder as board_column_entity_builder};
pub use card::{entity as card_entity, entity_builder as card_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
