use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};
use tempfile::TempDir;

use crate::error::TestError;

/// Pool size for on-disk contexts.
const ON_DISK_CONNECTIONS: u32 = 8;

/// Test context containing the database connection for an isolated test.
///
/// Provides an in-memory SQLite database connection for unit and integration testing,
/// or a file-backed one with a multi-connection pool when concurrent transactions must
/// really contend. The database is created lazily on first access and persists for the
/// lifetime of the test context.
pub struct TestContext {
    /// Optional database connection to the SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called. Using `Option` allows
    /// deferred connection until actually needed by the test.
    pub db: Option<DatabaseConnection>,

    /// Directory holding the database file for on-disk contexts, removed on drop.
    dir: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self { db: None, dir: None }
    }

    /// Creates a test context backed by a database file in a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose pool opens several connections to the file
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn on_disk() -> Result<Self, TestError> {
        Ok(Self {
            db: None,
            dir: Some(tempfile::tempdir()?),
        })
    }

    /// Gets or creates the SQLite database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// connects to a new in-memory database (or the context's database file) and stores
    /// the connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut opt = match self.dir {
                    Some(ref dir) => {
                        let path = dir.path().join("test.db");
                        let mut opt =
                            ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
                        opt.max_connections(ON_DISK_CONNECTIONS);
                        opt
                    }
                    None => {
                        // Every in-memory connection is its own database, so the pool holds exactly one.
                        let mut opt = ConnectOptions::new("sqlite::memory:");
                        opt.max_connections(1).min_connections(1);
                        opt
                    }
                };
                opt.sqlx_logging(false);

                let db = Database::connect(opt).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
