//! Shared connection helper for the game database files

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::application::ports::outbound::StoreError;

/// Open a read-only pool on one of the server's SQLite files.
pub(crate) async fn connect_read_only(path: &str, label: &str) -> Result<SqlitePool> {
    let pool = SqlitePool::connect(&format!("sqlite:{path}?mode=ro"))
        .await
        .with_context(|| format!("failed to open {label} database at {path}"))?;
    tracing::info!("connected to {} database: {}", label, path);
    Ok(pool)
}

/// Cheap liveness probe used by the port health checks.
pub(crate) async fn probe(pool: &SqlitePool) -> bool {
    sqlx::query("SELECT 1").fetch_one(pool).await.is_ok()
}

pub(crate) fn query_error(e: sqlx::Error) -> StoreError {
    StoreError::Query(e.to_string())
}
