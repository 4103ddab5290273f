//! Outbound ports - Interfaces that the application requires from the game databases

mod store_port;

pub use store_port::{ItemsStore, PlayersStore, StoreError, VillageRow, ZonesStore};
