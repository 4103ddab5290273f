//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite adapters for the three game server databases
//! - Config: Application configuration

pub mod config;
pub mod persistence;
