//! Application layer - Use cases and orchestration
//!
//! This layer contains:
//! - Ports: interfaces the application requires from the game databases
//! - Services: the village record builder and the export pipeline
//! - DTOs: the JSON shapes written for the map frontend

pub mod dto;
pub mod ports;
pub mod services;
