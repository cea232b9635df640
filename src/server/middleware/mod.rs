//! Request guards and session wrappers.
//!
//! Identity is established upstream and stored in the session; `AuthGuard` turns that
//! session entry into a user row for the handlers.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
