use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use domain::DomainError;
use std::time::Duration;
use tracing::info;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const POOL_SIZE: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

// Three independent collections, no foreign keys. Product names are
// deliberately not UNIQUE; the service owns that check.
const SCHEMA_SQL: &str = "
    PRAGMA journal_mode = WAL;
    CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        price BIGINT NOT NULL CHECK (price >= 0),
        description TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL CHECK (category IN ('Fruits', 'Vegetables', 'Spices')),
        image TEXT
    );
    CREATE TABLE IF NOT EXISTS profiles (
        id TEXT PRIMARY KEY NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        gender TEXT NOT NULL,
        address TEXT NOT NULL,
        profile_image TEXT
    );
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    );
";

#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Persistence handle. Opened once at startup, passed to every repository,
/// closed at shutdown.
pub struct Database {
    pool: SqlitePool,
    location: String,
}

impl Database {
    /// Open (creating if needed) the SQLite database at `database_url`.
    /// A `sqlite://` prefix is accepted and stripped.
    pub fn open(database_url: &str) -> Result<Self, DomainError> {
        let location = database_url
            .strip_prefix("sqlite://")
            .unwrap_or(database_url)
            .to_string();

        let manager = ConnectionManager::<SqliteConnection>::new(location.as_str());
        let pool = r2d2::Pool::builder()
            .max_size(POOL_SIZE)
            .connection_timeout(CONNECT_TIMEOUT)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout: BUSY_TIMEOUT,
            }))
            .build(manager)
            .map_err(|e| {
                DomainError::RepositoryError(format!("Failed to open {}: {}", location, e))
            })?;

        let database = Database { pool, location };
        database.initialize_schema()?;
        info!("Connected to database at {}", database.location);

        Ok(database)
    }

    fn initialize_schema(&self) -> Result<(), DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        conn.batch_execute(SCHEMA_SQL)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Release the handle. Repositories still holding a pool clone keep
    /// their connections until they are dropped too.
    pub fn close(self) {
        info!("Closing database at {}", self.location);
        drop(self.pool);
    }
}

/// Run a diesel query on a pooled connection off the async runtime.
pub(crate) async fn run<T, F>(pool: &SqlitePool, query: F) -> Result<T, DomainError>
where
    F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();

    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        query(&mut *conn).map_err(|e| DomainError::RepositoryError(e.to_string()))
    })
    .await
    .map_err(|e| DomainError::RepositoryError(e.to_string()))?
}
