//! WurmMapGen - Village map data exporter for Wurm Unlimited servers
//!
//! Reads the server's zones, items and players SQLite databases and writes
//! `data/villages.json` under the configured output root, for the map
//! frontend to render deed borders and village markers.

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::services::{ExportOutcome, VillageExportService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::GameStores;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize logging; the verbose flag raises the default level
    let default_filter = if config.verbose {
        "wurmmapgen=debug"
    } else {
        "wurmmapgen=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WurmMapGen village export");
    tracing::info!("  Zones: {}", config.zones_db_path);
    tracing::info!("  Items: {}", config.items_db_path);
    tracing::info!("  Players: {}", config.players_db_path);
    tracing::info!("  Output root: {}", config.output_root.display());

    let started = Instant::now();

    // An unreachable database makes the export a no-op, not a failure.
    let stores = match GameStores::connect(&config).await {
        Ok(stores) => stores,
        Err(e) => {
            tracing::warn!("could not connect to one or more game databases: {:#}", e);
            return Ok(());
        }
    };

    let service = VillageExportService::new(
        Arc::new(stores.zones),
        Arc::new(stores.items),
        Arc::new(stores.players),
        config.output_root.clone(),
    );

    match service.run().await? {
        ExportOutcome::Exported(count) => {
            tracing::info!(
                "exported {} villages in {} ms",
                count,
                started.elapsed().as_millis()
            );
        }
        ExportOutcome::Skipped => {
            tracing::info!("village export skipped, no file written");
        }
    }

    Ok(())
}
