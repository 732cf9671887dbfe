//! Repository layer for database operations
//!
//! Every function takes an explicit `&mut SqliteConnection`; callers acquire
//! one connection per request and hold it until the request completes.

pub mod regions;
pub mod routes;
pub mod schema;
pub mod source_files;
pub mod summary;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::path::Path;

use crate::ingest::IngestError;

/// Open (creating if needed) the store at `path` and make sure the schema and
/// seed regions exist
pub async fn open_store(path: &Path) -> Result<SqlitePool, IngestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(IngestError::store)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    // A single connection serializes writers against the store
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(IngestError::store)?;

    let mut conn = acquire(&pool).await?;
    schema::init_schema(&mut conn)
        .await
        .map_err(IngestError::store)?;
    schema::seed_regions(&mut conn)
        .await
        .map_err(IngestError::store)?;

    log::debug!("Opened store at {}", path.display());
    Ok(pool)
}

/// Acquire the connection for one request; it returns to the pool on drop
pub async fn acquire(pool: &SqlitePool) -> Result<PoolConnection<Sqlite>, IngestError> {
    pool.acquire().await.map_err(IngestError::store)
}

#[cfg(test)]
pub(crate) async fn memory_store() -> sqlx::SqliteConnection {
    use sqlx::Connection;

    let mut conn = sqlx::SqliteConnection::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    schema::init_schema(&mut conn).await.expect("schema");
    schema::seed_regions(&mut conn).await.expect("seed regions");
    conn
}
