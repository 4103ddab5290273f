//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the zones database (villages, citizen rolls)
    pub zones_db_path: String,
    /// Path to the items database (world object positions)
    pub items_db_path: String,
    /// Path to the players database (player registry)
    pub players_db_path: String,
    /// Root directory the map data is written under
    pub output_root: PathBuf,
    /// Log per-step progress
    pub verbose: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            zones_db_path: env::var("WURMMAPGEN_ZONES_DB")
                .unwrap_or_else(|_| "wurmzones.db".to_string()),
            items_db_path: env::var("WURMMAPGEN_ITEMS_DB")
                .unwrap_or_else(|_| "wurmitems.db".to_string()),
            players_db_path: env::var("WURMMAPGEN_PLAYERS_DB")
                .unwrap_or_else(|_| "wurmplayers.db".to_string()),

            output_root: env::var("WURMMAPGEN_OUTPUT_ROOT")
                .unwrap_or_else(|_| ".".to_string())
                .into(),

            verbose: env::var("WURMMAPGEN_VERBOSE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .context("WURMMAPGEN_VERBOSE must be true or false")?,
        })
    }
}
