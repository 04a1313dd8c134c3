//! Cellular-automaton passes that grow corridors around stamped rooms.
//!
//! Each pass reads one frozen snapshot of the floor and writes a fresh buffer,
//! so no cell ever sees a value produced earlier in the same pass.

use tracing::debug;

use crate::grid::Grid;
use crate::types::TileType;

pub(super) const SMOOTHING_PASSES: usize = 5;
/// Eligible cells skipped after each pillar within one pass.
pub(super) const PILLAR_COOLDOWN: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct PassStats {
    pub(super) changed: usize,
    pub(super) pillars: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellRule {
    Keep,
    Become(TileType),
    PillarSite,
}

#[derive(Default)]
struct PillarCooldown {
    remaining: usize,
}

impl PillarCooldown {
    fn try_place(&mut self) -> bool {
        if self.remaining == 0 {
            self.remaining = PILLAR_COOLDOWN;
            return true;
        }
        self.remaining -= 1;
        false
    }
}

pub(super) fn smooth_floor(floor: &mut Grid<TileType>, pillars: &mut Grid<TileType>) {
    for pass in 0..SMOOTHING_PASSES {
        let stats = smoothing_pass(floor, pillars);
        debug!(pass, changed = stats.changed, pillars = stats.pillars, "smoothing pass complete");
    }
    fill_leftover_empty(floor);
}

pub(super) fn smoothing_pass(
    floor: &mut Grid<TileType>,
    pillars: &mut Grid<TileType>,
) -> PassStats {
    let previous = floor.clone();
    let mut next = previous.clone();
    let mut cooldown = PillarCooldown::default();
    let mut stats = PassStats::default();

    for pos in previous.positions() {
        match rule_for(&previous, pos.x, pos.z) {
            CellRule::Keep => {}
            CellRule::Become(tile) => {
                if tile != previous[(pos.x, pos.z)] {
                    next[(pos.x, pos.z)] = tile;
                    stats.changed += 1;
                }
            }
            CellRule::PillarSite => {
                if cooldown.try_place() {
                    pillars[(pos.x, pos.z)] = TileType::Pillar;
                    stats.pillars += 1;
                }
            }
        }
    }

    *floor = next;
    stats
}

fn rule_for(grid: &Grid<TileType>, x: usize, z: usize) -> CellRule {
    if grid.is_border(x, z) {
        return CellRule::Become(TileType::Standard);
    }

    match grid[(x, z)] {
        TileType::Empty => CellRule::Become(TileType::Standard),
        TileType::Standard if grid.count_adjacent(x, z, TileType::Standard) <= 1 => {
            CellRule::Become(TileType::Room)
        }
        TileType::Standard if grid.fully_enclosed_by(x, z, TileType::Room) => {
            CellRule::Become(TileType::Room)
        }
        TileType::Standard if grid.fully_enclosed_by(x, z, TileType::Standard) => {
            CellRule::Become(TileType::Enviro)
        }
        TileType::Room if grid.count_adjacent(x, z, TileType::Room) <= 1 => {
            CellRule::Become(TileType::Standard)
        }
        TileType::Room if grid.fully_enclosed_by(x, z, TileType::Standard) => {
            CellRule::Become(TileType::Standard)
        }
        TileType::Room if grid.fully_enclosed_by(x, z, TileType::Room) => CellRule::PillarSite,
        _ => CellRule::Keep,
    }
}

fn fill_leftover_empty(floor: &mut Grid<TileType>) {
    for pos in floor.positions() {
        if floor[(pos.x, pos.z)] == TileType::Empty {
            floor[(pos.x, pos.z)] = TileType::Standard;
        }
    }
}
