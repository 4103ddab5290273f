//! Items database adapter (world object positions)

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::application::ports::outbound::{ItemsStore, StoreError};
use crate::infrastructure::persistence::connection::{connect_read_only, probe, query_error};

/// SQLite adapter for the items database (`wurmitems.db`)
pub struct SqliteItemsStore {
    pool: SqlitePool,
}

impl SqliteItemsStore {
    pub async fn connect(path: &str) -> Result<Self> {
        let pool = connect_read_only(path, "items").await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ItemsStore for SqliteItemsStore {
    async fn is_connected(&self) -> bool {
        probe(&self.pool).await
    }

    async fn fetch_item_position(&self, item_id: i64) -> Result<Option<(i32, i32)>, StoreError> {
        let row = sqlx::query("SELECT POSX, POSY FROM ITEMS WHERE WURMID = ?")
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        // POSX/POSY are declared REAL on the live server; positions are
        // non-negative, so truncating to whole units is a floor.
        let x: f64 = row.try_get("POSX").map_err(query_error)?;
        let y: f64 = row.try_get("POSY").map_err(query_error)?;
        Ok(Some((x as i32, y as i32)))
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn store_with_items(rows: &[(i64, f64, f64)]) -> SqliteItemsStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        sqlx::query("CREATE TABLE ITEMS (WURMID INTEGER PRIMARY KEY, POSX REAL, POSY REAL)")
            .execute(&pool)
            .await
            .expect("create table");
        for &(id, x, y) in rows {
            sqlx::query("INSERT INTO ITEMS (WURMID, POSX, POSY) VALUES (?, ?, ?)")
                .bind(id)
                .bind(x)
                .bind(y)
                .execute(&pool)
                .await
                .expect("insert row");
        }
        SqliteItemsStore { pool }
    }

    #[tokio::test]
    async fn test_real_positions_truncate_to_whole_units() {
        let store = store_with_items(&[(42, 44.7, 47.2)]).await;

        let position = store.fetch_item_position(42).await.expect("query");

        assert_eq!(position, Some((44, 47)));
    }

    #[tokio::test]
    async fn test_missing_item_yields_no_position() {
        let store = store_with_items(&[(42, 44.0, 44.0)]).await;

        let position = store.fetch_item_position(7).await.expect("query");

        assert_eq!(position, None);
    }
}
