//! Board server backend.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Authorization, ordering and transactional coordination
//! - **Data Layer** (`data/`) - Repositories and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, role policy and position planning
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session identity and the authentication guard
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** resolves the session user, converts the DTO and calls a service
//! 3. **Service** opens a transaction, authorizes against the board, then reads and writes
//! 4. **Data** runs the queries on that transaction
//! 5. **Controller** converts the domain model back to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
