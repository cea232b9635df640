//! HTTP request handlers.
//!
//! Handlers authenticate the caller through `AuthGuard`, convert DTOs to parameter
//! models, call a service and convert the result back. Board-level authorization happens
//! in the services.

pub mod activity;
pub mod board;
pub mod card;
pub mod card_member;
pub mod column;
pub mod member;
pub mod user;
