//! Generation settings
//!
//! Every field has a default, so a partial document deserializes into a
//! complete config. Reading the document from disk is up to the caller.

use serde::{Deserialize, Serialize};

use crate::map::{CAVE_SEED_LIMIT, MIN_ROOM_SIZE, RouteKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Room components smaller than this are removed from caves
    pub min_room_size: usize,
    /// Noise limit used to seed caves, 1-100 (higher means fewer rooms)
    pub cave_seed_limit: u32,
    /// Smoothing passes over the seeded noise
    pub cave_iterations: usize,
    /// Rooms placed by the dungeon generator
    pub room_count: usize,
    /// Largest side of a random room
    pub room_scale: usize,
    /// Squared distance under which regions get linked by a hallway
    pub link_distance2: u64,
    /// Added to the link distance after each pass that leaves regions apart
    pub link_distance2_step: u64,
    pub hallway_width: u32,
    pub route: RouteKind,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            min_room_size: MIN_ROOM_SIZE,
            cave_seed_limit: CAVE_SEED_LIMIT,
            cave_iterations: 4,
            room_count: 10,
            room_scale: 10,
            link_distance2: 36,
            link_distance2_step: 150,
            hallway_width: 1,
            route: RouteKind::Manhattan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: DungeonConfig =
            serde_json::from_str(r#"{ "room_count": 4, "route": "Vertical" }"#).unwrap();
        assert_eq!(config.room_count, 4);
        assert_eq!(config.route, RouteKind::Vertical);
        assert_eq!(config.min_room_size, 15);
        assert_eq!(config.cave_seed_limit, 55);
        assert_eq!(config.link_distance2, 36);
    }

    #[test]
    fn test_round_trip() {
        let config = DungeonConfig {
            hallway_width: 2,
            ..DungeonConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: DungeonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
