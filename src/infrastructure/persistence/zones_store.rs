//! Zones database adapter (villages and citizen rolls)

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::application::ports::outbound::{StoreError, VillageRow, ZonesStore};
use crate::domain::Bounds;
use crate::infrastructure::persistence::connection::{connect_read_only, probe, query_error};

/// SQLite adapter for the zones database (`wurmzones.db`)
pub struct SqliteZonesStore {
    pool: SqlitePool,
}

impl SqliteZonesStore {
    pub async fn connect(path: &str) -> Result<Self> {
        let pool = connect_read_only(path, "zones").await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ZonesStore for SqliteZonesStore {
    async fn is_connected(&self) -> bool {
        probe(&self.pool).await
    }

    async fn list_active_village_ids(&self) -> Result<Vec<i32>, StoreError> {
        let rows = sqlx::query("SELECT ID FROM VILLAGES WHERE DISBANDED = 0")
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter()
            .map(|row| row.try_get::<i32, _>("ID").map_err(query_error))
            .collect()
    }

    async fn fetch_village(&self, village_id: i32) -> Result<Option<VillageRow>, StoreError> {
        let row = sqlx::query(
            "SELECT NAME, MAYOR, DEVISE, STARTX, STARTY, ENDX, ENDY, TOKEN, PERMANENT \
             FROM VILLAGES WHERE ID = ?",
        )
        .bind(village_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        // Text columns may be NULL on old servers; treat NULL as empty.
        Ok(Some(VillageRow {
            name: row
                .try_get::<Option<String>, _>("NAME")
                .map_err(query_error)?
                .unwrap_or_default(),
            mayor: row
                .try_get::<Option<String>, _>("MAYOR")
                .map_err(query_error)?
                .unwrap_or_default(),
            motto: row
                .try_get::<Option<String>, _>("DEVISE")
                .map_err(query_error)?
                .unwrap_or_default(),
            bounds: Bounds::new(
                row.try_get("STARTX").map_err(query_error)?,
                row.try_get("STARTY").map_err(query_error)?,
                row.try_get("ENDX").map_err(query_error)?,
                row.try_get("ENDY").map_err(query_error)?,
            ),
            token_id: row.try_get("TOKEN").map_err(query_error)?,
            permanent: row.try_get("PERMANENT").map_err(query_error)?,
        }))
    }

    async fn list_citizen_ids(&self, village_id: i32) -> Result<Vec<i64>, StoreError> {
        let rows = sqlx::query("SELECT WURMID FROM CITIZENS WHERE VILLAGEID = ?")
            .bind(village_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter()
            .map(|row| row.try_get::<i64, _>("WURMID").map_err(query_error))
            .collect()
    }
}
