//! SeaORM entity definitions for the taskboard schema.

pub mod prelude;

pub mod activity;
pub mod board;
pub mod board_column;
pub mod board_member;
pub mod card;
pub mod card_member;
pub mod user;
