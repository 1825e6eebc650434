use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Level, User};
///
/// let test = TestBuilder::new()
///     .with_table(Level)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether the database lives in a temporary file instead of memory.
    on_disk: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            on_disk: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every kickoff table in dependency order.
    ///
    /// Levels come first since users and games reference them, followed by users, games
    /// and the tables joining the two. Tests that only touch a subset may still call
    /// `with_table()` individually.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_kickoff_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_kickoff_tables(self) -> Self {
        self.with_table(Level)
            .with_table(User)
            .with_table(Game)
            .with_table(GameParticipant)
            .with_table(Points)
            .with_table(Mission)
            .with_table(UserMission)
            .with_table(Favorite)
            .with_table(Video)
            .with_table(Payment)
            .with_table(Apply)
            .with_table(Notification)
    }

    /// Stores the test database in a temporary file.
    ///
    /// An in-memory SQLite database belongs to a single connection, so tests that run
    /// transactions on several pooled connections at once need a file. The file is removed
    /// when the context is dropped.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_database_file(mut self) -> Self {
        self.on_disk = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.on_disk {
            TestContext::on_disk()?
        } else {
            TestContext::new()
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
