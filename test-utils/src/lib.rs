//! Taskboard Test Utils
//!
//! Shared helpers for exercising the taskboard repositories and services against an
//! in-memory SQLite database.
//!
//! # Overview
//!
//! - **TestBuilder**: picks which entity tables exist in the test database
//! - **TestContext**: owns the database connection and an optional session
//! - **TestError**: setup failures
//! - **factory**: inserts rows with sensible defaults
//! - **fixture**: builds entity models in memory without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn moves_card() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_board_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
//!     let column = factory::create_column(db, board.id).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
