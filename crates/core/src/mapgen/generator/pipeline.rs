//! Layout-construction pipeline that composes the mapgen stages.

use tracing::info;

use crate::config::DungeonConfig;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::TileType;

use super::super::features::{place_features, roll_props};
use super::super::model::DungeonLayout;
use super::super::rooms::place_rooms;
use super::super::smoothing::smooth_floor;
use super::super::walls::derive_walls;

/// Runs every stage on an already validated configuration.
pub(super) fn build_layout(config: &DungeonConfig, rng: &mut impl RandomSource) -> DungeonLayout {
    let placed = place_rooms(config, rng);
    let mut floor = placed.floor;
    let mut pillars = Grid::new(config.dungeon_width, config.dungeon_length);
    smooth_floor(&mut floor, &mut pillars);

    let walls = derive_walls(&floor, &placed.wall_marks);
    let props = roll_props(&floor, rng);
    let features = place_features(&pillars, &props);

    let layout = DungeonLayout {
        floor,
        walls: walls.grid,
        features,
        rooms: placed.attempts,
        wall_segments: walls.segments,
    };
    info!(
        width = layout.width(),
        length = layout.length(),
        attempted_rooms = layout.room_attempts().len(),
        accepted_rooms = layout.accepted_rooms().count(),
        room_tiles = layout.floor().count(TileType::Room),
        pillars = layout.features().count(TileType::Pillar),
        "dungeon layout generated"
    );
    layout
}
