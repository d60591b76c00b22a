//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The database file
//! is created on first connect if it does not exist.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DEFAULT_MAX_CONNECTIONS;

/// Create a SQLite connection pool for the given database file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or created.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("mietermatch.db")).await?;
/// ```
pub async fn create_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `path` - SQLite database file
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
