//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Village: the per-settlement record assembled from the game databases
//! - Bounds: the axis-aligned deed rectangle with its reconciliation rule

pub mod village;

pub use village::{Bounds, Village};
