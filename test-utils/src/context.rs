use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// In-memory environment for a single test.
///
/// The connection and the session are both created on first use and live as long as
/// the context. The session store shares the test database.
pub struct TestContext {
    /// Connection to the in-memory SQLite database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same database, created by `session()`.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a context with neither a connection nor a session.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the connection, opening `sqlite::memory:` the first time.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The context's connection
    /// - `Err(TestError::Database)` - Opening the database failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        self.db
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("test database missing".to_string()).into())
    }

    /// Executes each CREATE TABLE statement in order.
    ///
    /// # Arguments
    /// - `stmts` - Statements produced by `TestBuilder`
    ///
    /// # Returns
    /// - `Ok(())` - Every table was created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Executes each CREATE INDEX statement in order.
    pub async fn with_indexes(&mut self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the session, creating the session table and a fresh session the first time.
    ///
    /// Sessions expire after seven days of inactivity, matching the server's layer.
    ///
    /// # Returns
    /// - `Ok(&Session)` - The context's session
    /// - `Err(TestError::Database)` - The session table could not be created
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            let session = Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            );
            self.session = Some(session);
        }

        self.session
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("test session missing".to_string()).into())
    }

    /// Returns both the connection and the session.
    ///
    /// Avoids holding two overlapping mutable borrows when a test needs both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context incomplete".to_string()).into()),
        }
    }
}
