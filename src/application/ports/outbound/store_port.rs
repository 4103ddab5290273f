//! Store ports - Interfaces for the three game server databases
//!
//! The Wurm server keeps zones, items and players in three independently
//! reachable SQLite databases. Each port models one of them as a read-only
//! capability with its own health check; the services compose them
//! explicitly so a fault in one store stays isolated from the others.

use async_trait::async_trait;

use crate::domain::Bounds;

/// Error type for store access
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Connectivity(String),
    #[error("query failed: {0}")]
    Query(String),
}

/// The raw VILLAGES row for one settlement, before any reconciliation.
#[derive(Debug, Clone)]
pub struct VillageRow {
    pub name: String,
    pub mayor: String,
    pub motto: String,
    pub bounds: Bounds,
    pub token_id: i64,
    pub permanent: bool,
}

/// Port for the zones database (villages and their citizen rolls)
#[async_trait]
pub trait ZonesStore: Send + Sync {
    /// Whether the store currently answers queries.
    async fn is_connected(&self) -> bool;

    /// Ids of all villages that have not been disbanded, in store order.
    async fn list_active_village_ids(&self) -> Result<Vec<i32>, StoreError>;

    /// The settlement row for one village id, if it exists.
    async fn fetch_village(&self, village_id: i32) -> Result<Option<VillageRow>, StoreError>;

    /// Candidate citizen ids from the membership table for one village.
    ///
    /// Candidates may reference players that no longer exist; callers must
    /// confirm each id against the player registry before counting it.
    async fn list_citizen_ids(&self, village_id: i32) -> Result<Vec<i64>, StoreError>;
}

/// Port for the items database (world object positions)
#[async_trait]
pub trait ItemsStore: Send + Sync {
    /// Whether the store currently answers queries.
    async fn is_connected(&self) -> bool;

    /// Raw world position of an item, at 4x the map tile resolution.
    async fn fetch_item_position(&self, item_id: i64) -> Result<Option<(i32, i32)>, StoreError>;
}

/// Port for the players database (registry of valid player ids)
#[async_trait]
pub trait PlayersStore: Send + Sync {
    /// Whether the store currently answers queries.
    async fn is_connected(&self) -> bool;

    /// Whether the given id still refers to an existing player.
    async fn player_exists(&self, player_id: i64) -> Result<bool, StoreError>;
}
