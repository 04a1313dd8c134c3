//! Procedural dungeon layout generation split into coherent submodules.

pub mod model;

mod features;
mod generator;
mod rooms;
mod smoothing;
mod walls;

pub use generator::{DungeonGenerator, DungeonSession};
pub use model::{Cell, DungeonLayout, Room, RoomAttempt, WallKind, WallSegment};

use crate::config::DungeonConfig;
use crate::error::Result;

pub fn generate_layout(config: &DungeonConfig, seed: u64) -> Result<DungeonLayout> {
    Ok(DungeonGenerator::new(config.clone())?.generate_from_seed(seed))
}

#[cfg(test)]
mod tests {
    use super::{DungeonConfig, DungeonGenerator};

    #[test]
    fn generate_layout_matches_generator_output() {
        let config = DungeonConfig::with_size(16, 12);
        let seed = 123_u64;

        let from_helper = super::generate_layout(&config, seed).expect("valid config");
        let from_generator =
            DungeonGenerator::new(config).expect("valid config").generate_from_seed(seed);

        assert_eq!(from_helper, from_generator);
    }

    #[test]
    fn generate_layout_rejects_undersized_grids() {
        assert!(super::generate_layout(&DungeonConfig::with_size(4, 4), 1).is_err());
    }
}
