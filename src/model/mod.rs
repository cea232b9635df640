//! Request and response DTOs shared by the HTTP layer.

pub mod activity;
pub mod api;
pub mod board;
pub mod card;
pub mod column;
pub mod member;
pub mod user;
