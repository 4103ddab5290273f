//! JSON document written to `data/villages.json`
//!
//! The map frontend expects a single top-level object with a `villages`
//! array. Marker coordinates carry a half-tile offset so the marker renders
//! centered on its map cell.

use serde::{Deserialize, Serialize};

use crate::domain::Village;

/// Top-level document for the villages map layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillageMapDocument {
    pub villages: Vec<VillageMapEntry>,
}

impl VillageMapDocument {
    pub fn from_records(records: &[Village]) -> Self {
        Self {
            villages: records.iter().map(VillageMapEntry::from).collect(),
        }
    }
}

/// One village marker on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillageMapEntry {
    /// Deed rectangle as `[start_x, start_y, end_x, end_y]`.
    pub borders: [i32; 4],
    pub name: String,
    pub motto: String,
    pub permanent: bool,
    /// Token tile x, centered on the cell.
    pub x: f64,
    /// Token tile y, centered on the cell.
    pub y: f64,
    pub mayor: String,
    pub citizens: u32,
}

impl From<&Village> for VillageMapEntry {
    fn from(village: &Village) -> Self {
        Self {
            borders: [
                village.bounds.start_x,
                village.bounds.start_y,
                village.bounds.end_x,
                village.bounds.end_y,
            ],
            name: village.name.clone(),
            motto: village.motto.clone(),
            permanent: village.permanent,
            x: f64::from(village.token_x) + 0.5,
            y: f64::from(village.token_y) + 0.5,
            mayor: village.mayor.clone(),
            citizens: village.citizens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bounds;

    fn sample_village() -> Village {
        let mut village = Village::with_defaults(7);
        village.name = "Newtown".to_string();
        village.mayor = "Alyona".to_string();
        village.motto = "Hello".to_string();
        village.bounds = Bounds::new(10, 10, 20, 20);
        village.permanent = true;
        village.token_x = 11;
        village.token_y = 11;
        village.citizens = 3;
        village
    }

    #[test]
    fn test_entry_offsets_marker_to_cell_center() {
        let entry = VillageMapEntry::from(&sample_village());
        assert_eq!(entry.borders, [10, 10, 20, 20]);
        assert_eq!(entry.x, 11.5);
        assert_eq!(entry.y, 11.5);
        assert_eq!(entry.citizens, 3);
        assert!(entry.permanent);
    }

    #[test]
    fn test_document_serialization_shape() {
        let doc = VillageMapDocument::from_records(&[sample_village()]);
        let json = serde_json::to_value(&doc).expect("serialization should succeed");

        let villages = json["villages"].as_array().expect("villages array");
        assert_eq!(villages.len(), 1);
        assert_eq!(villages[0]["name"], "Newtown");
        assert_eq!(villages[0]["motto"], "Hello");
        assert_eq!(villages[0]["mayor"], "Alyona");
        assert_eq!(villages[0]["permanent"], true);
        assert_eq!(villages[0]["borders"][2], 20);
        assert_eq!(villages[0]["x"], 11.5);
        assert_eq!(villages[0]["y"], 11.5);
    }
}
