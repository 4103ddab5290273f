//! Players database adapter (player registry)

use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::{PlayersStore, StoreError};
use crate::infrastructure::persistence::connection::{connect_read_only, probe, query_error};

/// SQLite adapter for the players database (`wurmplayers.db`)
pub struct SqlitePlayersStore {
    pool: SqlitePool,
}

impl SqlitePlayersStore {
    pub async fn connect(path: &str) -> Result<Self> {
        let pool = connect_read_only(path, "players").await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl PlayersStore for SqlitePlayersStore {
    async fn is_connected(&self) -> bool {
        probe(&self.pool).await
    }

    async fn player_exists(&self, player_id: i64) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT WURMID FROM PLAYERS WHERE WURMID = ?")
            .bind(player_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(row.is_some())
    }
}
