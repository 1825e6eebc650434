use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use tempfile::TempDir;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated environment for a single test.
///
/// Holds a SQLite connection, in memory unless created by `on_disk()`, and a session stored
/// in that same database. Both are created on first use and live as long as the context.
pub struct TestContext {
    /// Connection to the test database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the `tower_sessions` table of `db`, created by `session()`.
    pub session: Option<Session>,

    /// Directory holding the database file; `None` for an in-memory database.
    database_dir: Option<TempDir>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates an empty context with neither database nor session.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            database_dir: None,
        }
    }

    /// Creates an empty context whose database will be a file in a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context without connection yet
    /// - `Err(TestError::Io)` - The temporary directory could not be created
    pub fn on_disk() -> Result<Self, TestError> {
        Ok(Self {
            database_dir: Some(TempDir::new()?),
            ..Self::new()
        })
    }

    /// Returns the database connection, connecting on first call.
    ///
    /// Connects to `sqlite::memory:`, or to a file in the temporary directory of a context
    /// created by `on_disk()`.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection shared for the lifetime of the context
    /// - `Err(TestError::Database)` - Connecting to the database failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let url = match &self.database_dir {
                Some(dir) => format!(
                    "sqlite://{}?mode=rwc",
                    dir.path().join("test.db").display()
                ),
                None => "sqlite::memory:".to_string(),
            };
            let db = Database::connect(url).await?;
            self.db = Some(db);
        }

        self.db
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("database not initialized".into()).into())
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; statements referencing other tables must come after
    /// the tables they reference.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements generated from entities
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

    /// Returns the session, creating the session table and a fresh session on first call.
    ///
    /// The session store reuses the SQLx pool of the in-memory connection so session data
    /// and application tables live in the same database.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session shared for the lifetime of the context
    /// - `Err(TestError::Database)` - Database or session table setup failed
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    ///
    /// session.insert("kickoff:user_id", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let pool = db.get_sqlite_connection_pool();
            let session_store = SqliteStore::new(pool.clone());

            session_store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            let session = Session::new(
                None,
                Arc::new(session_store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            );

            self.session = Some(session);
        }

        self.session
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("session not initialized".into()).into())
    }

    /// Returns both the database and the session, initializing whichever is missing.
    ///
    /// Use this instead of calling `database()` and `session()` back to back, which would
    /// hold two mutable borrows of the context.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".into()).into()),
        }
    }
}
