//! SQLite persistence adapters
//!
//! The Wurm server keeps its data in three separate SQLite files. Each
//! adapter wraps its own read-only pool and implements the matching store
//! port; a combined [`GameStores`] handle connects all three at once.

mod connection;
mod items_store;
mod players_store;
mod zones_store;

pub use items_store::SqliteItemsStore;
pub use players_store::SqlitePlayersStore;
pub use zones_store::SqliteZonesStore;

use anyhow::Result;

use crate::infrastructure::config::AppConfig;

/// Combined handle for the three game databases
pub struct GameStores {
    pub zones: SqliteZonesStore,
    pub items: SqliteItemsStore,
    pub players: SqlitePlayersStore,
}

impl GameStores {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            zones: SqliteZonesStore::connect(&config.zones_db_path).await?,
            items: SqliteItemsStore::connect(&config.items_db_path).await?,
            players: SqlitePlayersStore::connect(&config.players_db_path).await?,
        })
    }
}
