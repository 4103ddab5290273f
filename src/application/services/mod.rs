//! Application services - the village pipeline

mod village_builder;
mod village_export_service;

pub use village_builder::VillageRecordBuilder;
pub use village_export_service::{ExportOutcome, VillageExportService};

/// In-memory fakes for the three store ports, shared by the service tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, HashSet};

    use async_trait::async_trait;

    use crate::application::ports::outbound::{
        ItemsStore, PlayersStore, StoreError, VillageRow, ZonesStore,
    };

    #[derive(Default)]
    pub struct FakeZones {
        pub active_ids: Vec<i32>,
        pub villages: HashMap<i32, VillageRow>,
        pub citizen_rolls: HashMap<i32, Vec<i64>>,
        pub unhealthy: bool,
        pub fail_list: bool,
        pub fail_fetch: bool,
        pub fail_citizens: bool,
    }

    #[async_trait]
    impl ZonesStore for FakeZones {
        async fn is_connected(&self) -> bool {
            !self.unhealthy
        }

        async fn list_active_village_ids(&self) -> Result<Vec<i32>, StoreError> {
            if self.fail_list {
                return Err(StoreError::Query("VILLAGES table is locked".into()));
            }
            Ok(self.active_ids.clone())
        }

        async fn fetch_village(&self, village_id: i32) -> Result<Option<VillageRow>, StoreError> {
            if self.fail_fetch {
                return Err(StoreError::Query("VILLAGES table is locked".into()));
            }
            Ok(self.villages.get(&village_id).cloned())
        }

        async fn list_citizen_ids(&self, village_id: i32) -> Result<Vec<i64>, StoreError> {
            if self.fail_citizens {
                return Err(StoreError::Query("CITIZENS table is locked".into()));
            }
            Ok(self.citizen_rolls.get(&village_id).cloned().unwrap_or_default())
        }
    }

    #[derive(Default)]
    pub struct FakeItems {
        pub positions: HashMap<i64, (i32, i32)>,
        pub unhealthy: bool,
        pub fail_fetch: bool,
    }

    #[async_trait]
    impl ItemsStore for FakeItems {
        async fn is_connected(&self) -> bool {
            !self.unhealthy
        }

        async fn fetch_item_position(
            &self,
            item_id: i64,
        ) -> Result<Option<(i32, i32)>, StoreError> {
            if self.fail_fetch {
                return Err(StoreError::Query("ITEMS table is locked".into()));
            }
            Ok(self.positions.get(&item_id).copied())
        }
    }

    #[derive(Default)]
    pub struct FakePlayers {
        pub known: HashSet<i64>,
        pub unhealthy: bool,
        /// Lookups for these ids fail instead of answering.
        pub failing_ids: HashSet<i64>,
    }

    #[async_trait]
    impl PlayersStore for FakePlayers {
        async fn is_connected(&self) -> bool {
            !self.unhealthy
        }

        async fn player_exists(&self, player_id: i64) -> Result<bool, StoreError> {
            if self.failing_ids.contains(&player_id) {
                return Err(StoreError::Query("PLAYERS table is locked".into()));
            }
            Ok(self.known.contains(&player_id))
        }
    }
}
