//! Persistence adapter: SQLite pool construction, embedded migrations, and
//! the task repository.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Failure to open or prepare the backing store at startup.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Failed to open database at '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to apply migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Open (creating if absent) the SQLite database and build a connection pool.
///
/// `database_url` is a sqlx SQLite URL, e.g. `sqlite://tasks.db` or
/// `sqlite::memory:`. WAL journaling keeps concurrent readers from blocking
/// the writer.
pub async fn connect(database_url: &str) -> Result<DbPool, InitError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|source| InitError::Connect {
            url: database_url.to_string(),
            source,
        })?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|source| InitError::Connect {
            url: database_url.to_string(),
            source,
        })
}

/// Apply embedded migrations. Idempotent: already-applied migrations are
/// skipped.
pub async fn run_migrations(pool: &DbPool) -> Result<(), InitError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Liveness probe: a trivial query over a pooled connection.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
