//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. `permission` and `position` hold the
//! pure rules every board operation goes through: the role table and the ordering plans.

pub mod activity;
pub mod board;
pub mod card;
pub mod card_member;
pub mod column;
pub mod member;
pub mod permission;
pub mod position;
pub mod user;
