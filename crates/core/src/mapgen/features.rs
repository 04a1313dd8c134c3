//! Pillar and floor-prop placement over the settled floor.

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::TileType;

pub(super) const PROP_CHANCE_PERCENT: usize = 10;

/// One prop roll per `Room` tile, in scan order.
pub(super) fn roll_props(floor: &Grid<TileType>, rng: &mut impl RandomSource) -> Grid<bool> {
    let mut props = Grid::filled(floor.width(), floor.length(), false);
    for pos in floor.positions() {
        if floor[(pos.x, pos.z)] == TileType::Room && rng.percent_chance(PROP_CHANCE_PERCENT) {
            props[(pos.x, pos.z)] = true;
        }
    }
    props
}

pub(super) fn place_features(pillars: &Grid<TileType>, props: &Grid<bool>) -> Grid<TileType> {
    let mut features = Grid::new(pillars.width(), pillars.length());
    for pos in pillars.positions() {
        features[(pos.x, pos.z)] = if pillars[(pos.x, pos.z)] == TileType::Pillar {
            TileType::Pillar
        } else if props[(pos.x, pos.z)] {
            TileType::FloorProp
        } else {
            TileType::Empty
        };
    }
    features
}
