//! Data transfer objects - JSON shapes consumed by the map frontend

mod village_map;

pub use village_map::{VillageMapDocument, VillageMapEntry};
