//! Per-village record assembly
//!
//! Joins the zones, items and players stores into one [`Village`] record.
//! The three lookups run strictly in sequence and each one is independently
//! fault-tolerant: a failed lookup is logged and leaves its portion of the
//! record at the defaults, so one bad settlement never blocks the export of
//! the others. Only store connectivity is treated as fatal, and that is
//! checked once up front by the export service.

use std::sync::Arc;

use crate::application::ports::outbound::{ItemsStore, PlayersStore, ZonesStore};
use crate::domain::{village::item_pos_to_tile, Village};

/// Builds one fully-populated village record per id.
pub struct VillageRecordBuilder<Z: ZonesStore, I: ItemsStore, P: PlayersStore> {
    zones: Arc<Z>,
    items: Arc<I>,
    players: Arc<P>,
}

impl<Z: ZonesStore, I: ItemsStore, P: PlayersStore> VillageRecordBuilder<Z, I, P> {
    pub fn new(zones: Arc<Z>, items: Arc<I>, players: Arc<P>) -> Self {
        Self {
            zones,
            items,
            players,
        }
    }

    /// Assemble the record for one village.
    ///
    /// Never fails: the worst case is a record carrying defaults for the
    /// portions whose lookups faulted.
    pub async fn build(&self, village_id: i32) -> Village {
        let mut village = Village::with_defaults(village_id);
        self.populate_attributes(&mut village).await;
        self.populate_token_position(&mut village).await;
        self.populate_citizen_count(&mut village).await;
        village
    }

    /// Core attributes from the VILLAGES row.
    async fn populate_attributes(&self, village: &mut Village) {
        match self.zones.fetch_village(village.id).await {
            Ok(Some(row)) => {
                village.name = row.name;
                village.mayor = row.mayor;
                village.motto = row.motto;
                village.bounds = row.bounds;
                village.permanent = row.permanent;
                village.token_id = row.token_id;
            }
            Ok(None) => {
                tracing::debug!("village {} has no VILLAGES row", village.id);
            }
            Err(e) => {
                tracing::error!("failed to load attributes for village {}: {}", village.id, e);
            }
        }
    }

    /// Token position from the items store, reconciled onto the deed.
    async fn populate_token_position(&self, village: &mut Village) {
        match self.items.fetch_item_position(village.token_id).await {
            Ok(Some((raw_x, raw_y))) => {
                village.token_x = item_pos_to_tile(raw_x);
                village.token_y = item_pos_to_tile(raw_y);
            }
            Ok(None) => {
                tracing::debug!("village {} token {} not found", village.id, village.token_id);
            }
            Err(e) => {
                tracing::error!("failed to locate token for village {}: {}", village.id, e);
            }
        }

        village.reconcile_token_position();
    }

    /// Citizen count, confirming each membership row against the registry.
    ///
    /// Membership rows may reference deleted players; those are not counted.
    async fn populate_citizen_count(&self, village: &mut Village) {
        let candidates = match self.zones.list_citizen_ids(village.id).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!("failed to list citizens for village {}: {}", village.id, e);
                return;
            }
        };

        for candidate in candidates {
            match self.players.player_exists(candidate).await {
                Ok(true) => village.citizens += 1,
                Ok(false) => {
                    tracing::debug!(
                        "citizen {} of village {} no longer exists",
                        candidate,
                        village.id
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "failed to confirm citizen {} of village {}: {}",
                        candidate,
                        village.id,
                        e
                    );
                }
            }
        }
    }
}
