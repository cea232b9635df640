//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They resolve the caller's
//! access to a board, run the ordering engine and open the transaction each mutating
//! operation runs in. Services work with domain models, never DTOs or entity models.

pub mod access;
pub mod activity;
pub mod board;
pub mod card;
pub mod card_member;
pub mod column;
pub mod member;
pub mod ordering;

#[cfg(test)]
mod test;
