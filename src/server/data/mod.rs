//! Database repository layer for all domain entities.
//!
//! Repositories handle the CRUD queries for each table and convert entity models into
//! domain models at the boundary. Every repository is generic over `ConnectionTrait` so
//! the same queries run against a plain connection or inside an open transaction.

pub mod activity;
pub mod board;
pub mod board_column;
pub mod board_member;
pub mod card;
pub mod card_member;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
