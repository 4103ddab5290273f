//! Village export pipeline
//!
//! Drives the full run: health-check the three stores, list the active
//! villages, build one record per id, and write `data/villages.json` under
//! the configured output root. The output file is truncated and rewritten
//! on every run; the write is not atomic, which is accepted for an offline
//! batch job.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::dto::VillageMapDocument;
use crate::application::ports::outbound::{ItemsStore, PlayersStore, ZonesStore};
use crate::application::services::VillageRecordBuilder;

/// How a run ended when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written with this many village entries.
    Exported(usize),
    /// Nothing to do: a store was unreachable or no active villages exist.
    /// No file is written.
    Skipped,
}

/// Orchestrates one export run end to end.
pub struct VillageExportService<Z: ZonesStore, I: ItemsStore, P: PlayersStore> {
    zones: Arc<Z>,
    items: Arc<I>,
    players: Arc<P>,
    output_root: PathBuf,
}

impl<Z: ZonesStore, I: ItemsStore, P: PlayersStore> VillageExportService<Z, I, P> {
    pub fn new(zones: Arc<Z>, items: Arc<I>, players: Arc<P>, output_root: PathBuf) -> Self {
        Self {
            zones,
            items,
            players,
            output_root,
        }
    }

    /// Run the export once.
    ///
    /// Skip conditions (unreachable store, zero active villages) are normal
    /// outcomes, not errors. A fault on the village list query or on the
    /// final file write fails the run; per-village faults never do.
    pub async fn run(&self) -> Result<ExportOutcome> {
        if !self.all_stores_connected().await {
            tracing::warn!("could not connect to one or more game databases, skipping village export");
            return Ok(ExportOutcome::Skipped);
        }

        tracing::debug!("loading villages from the zones database");
        let village_ids = self
            .zones
            .list_active_village_ids()
            .await
            .context("failed to load the village list")?;

        if village_ids.is_empty() {
            tracing::info!("no villages found, skipping village export");
            return Ok(ExportOutcome::Skipped);
        }

        let builder = VillageRecordBuilder::new(
            self.zones.clone(),
            self.items.clone(),
            self.players.clone(),
        );

        let mut records = Vec::with_capacity(village_ids.len());
        for village_id in village_ids {
            records.push(builder.build(village_id).await);
        }

        let document = VillageMapDocument::from_records(&records);
        self.write_document(&document)?;

        tracing::info!("added {} entries to villages.json", records.len());
        Ok(ExportOutcome::Exported(records.len()))
    }

    async fn all_stores_connected(&self) -> bool {
        self.zones.is_connected().await
            && self.items.is_connected().await
            && self.players.is_connected().await
    }

    fn write_document(&self, document: &VillageMapDocument) -> Result<()> {
        let data_dir = self.output_root.join("data");
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;

        let path = data_dir.join("villages.json");
        tracing::debug!("creating {}", path.display());

        let json = serde_json::to_string(document).context("failed to serialize villages")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }
}
