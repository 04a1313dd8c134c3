//! Public data models for generated layouts, rooms, and wall segments.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::Result;
use crate::grid::Grid;
use crate::types::{Pos, Side, TileType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    pub x: usize,
    pub z: usize,
    pub width: usize,
    pub length: usize,
}

impl Room {
    pub fn right(self) -> usize {
        self.x + self.width - 1
    }

    pub fn top(self) -> usize {
        self.z + self.length - 1
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.x && pos.x <= self.right() && pos.z >= self.z && pos.z <= self.top()
    }

    /// Whether `other` comes within `margin` tiles of this room. A margin
    /// wider than the address space saturates and always overlaps.
    pub fn overlaps_with_margin(self, other: &Self, margin: usize) -> bool {
        self.x < other.x.saturating_add(other.width).saturating_add(margin)
            && self.x.saturating_add(self.width).saturating_add(margin) > other.x
            && self.z < other.z.saturating_add(other.length).saturating_add(margin)
            && self.z.saturating_add(self.length).saturating_add(margin) > other.z
    }

    pub fn is_corner(self, pos: Pos) -> bool {
        (pos.x == self.x || pos.x == self.right()) && (pos.z == self.z || pos.z == self.top())
    }

    pub fn is_edge(self, pos: Pos) -> bool {
        self.contains(pos)
            && (pos.x == self.x || pos.x == self.right() || pos.z == self.z || pos.z == self.top())
    }

    /// Cells inside the rectangle, `x` outer and `z` inner.
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (self.x..=self.right()).flat_map(move |x| (self.z..=self.top()).map(move |z| Pos { x, z }))
    }
}

/// One entry of the room list. Rejected attempts still stamp floor tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoomAttempt {
    pub room: Room,
    pub accepted: bool,
    pub door: Option<Pos>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WallKind {
    Boundary,
    Room,
    Door,
    Enviro,
}

/// A wall piece on one edge of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct WallSegment {
    pub pos: Pos,
    pub side: Side,
    pub kind: WallKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub pos: Pos,
    pub floor: TileType,
    pub wall: TileType,
    pub feature: TileType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DungeonLayout {
    pub(super) floor: Grid<TileType>,
    pub(super) walls: Grid<TileType>,
    pub(super) features: Grid<TileType>,
    pub(super) rooms: Vec<RoomAttempt>,
    pub(super) wall_segments: Vec<WallSegment>,
}

impl DungeonLayout {
    pub fn width(&self) -> usize {
        self.floor.width()
    }

    pub fn length(&self) -> usize {
        self.floor.length()
    }

    pub fn floor(&self) -> &Grid<TileType> {
        &self.floor
    }

    pub fn walls(&self) -> &Grid<TileType> {
        &self.walls
    }

    pub fn features(&self) -> &Grid<TileType> {
        &self.features
    }

    pub fn cell(&self, x: usize, z: usize) -> Result<Cell> {
        Ok(Cell {
            pos: Pos { x, z },
            floor: self.floor.get(x, z)?,
            wall: self.walls.get(x, z)?,
            feature: self.features.get(x, z)?,
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.floor.positions().map(|pos| Cell {
            pos,
            floor: self.floor[(pos.x, pos.z)],
            wall: self.walls[(pos.x, pos.z)],
            feature: self.features[(pos.x, pos.z)],
        })
    }

    /// Every attempted room in placement order, accepted or not.
    pub fn room_attempts(&self) -> &[RoomAttempt] {
        &self.rooms
    }

    pub fn accepted_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|attempt| attempt.accepted).map(|attempt| &attempt.room)
    }

    pub fn wall_segments(&self) -> &[WallSegment] {
        &self.wall_segments
    }

    /// Cells covered by a ceiling: every `Enviro` tile.
    pub fn ceiling_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.floor.positions().filter(|pos| self.floor[(pos.x, pos.z)] == TileType::Enviro)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.length() as u32).to_le_bytes());
        for cell in self.cells() {
            bytes.push(cell.floor.code());
            bytes.push(cell.wall.code());
            bytes.push(cell.feature.code());
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for attempt in &self.rooms {
            for value in [attempt.room.x, attempt.room.z, attempt.room.width, attempt.room.length] {
                bytes.extend((value as u32).to_le_bytes());
            }
            bytes.push(u8::from(attempt.accepted));
        }

        bytes.extend((self.wall_segments.len() as u32).to_le_bytes());
        for segment in &self.wall_segments {
            bytes.extend((segment.pos.x as u32).to_le_bytes());
            bytes.extend((segment.pos.z as u32).to_le_bytes());
            bytes.push(segment.side.code());
            bytes.push(match segment.kind {
                WallKind::Boundary => 0,
                WallKind::Room => 1,
                WallKind::Door => 2,
                WallKind::Enviro => 3,
            });
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: Room = Room { x: 2, z: 3, width: 3, length: 4 };

    #[test]
    fn room_edges_and_corners() {
        assert_eq!(ROOM.right(), 4);
        assert_eq!(ROOM.top(), 6);
        assert!(ROOM.is_corner(Pos { x: 2, z: 3 }));
        assert!(ROOM.is_corner(Pos { x: 4, z: 6 }));
        assert!(!ROOM.is_corner(Pos { x: 3, z: 3 }));
        assert!(ROOM.is_edge(Pos { x: 3, z: 3 }));
        assert!(!ROOM.is_edge(Pos { x: 3, z: 4 }));
        assert!(!ROOM.is_edge(Pos { x: 1, z: 4 }));
        assert_eq!(ROOM.cells().count(), 12);
        assert_eq!(ROOM.cells().next(), Some(Pos { x: 2, z: 3 }));
    }

    #[test]
    fn margin_overlap_requires_a_gap_of_margin_tiles() {
        let touching = Room { x: 5, z: 3, width: 2, length: 2 };
        let one_gap = Room { x: 6, z: 3, width: 2, length: 2 };
        let two_gap = Room { x: 7, z: 3, width: 2, length: 2 };

        assert!(!ROOM.overlaps_with_margin(&touching, 0));
        assert!(ROOM.overlaps_with_margin(&touching, 1));
        assert!(!ROOM.overlaps_with_margin(&one_gap, 1));
        assert!(ROOM.overlaps_with_margin(&one_gap, 2));
        assert!(!ROOM.overlaps_with_margin(&two_gap, 2));
        assert!(touching.overlaps_with_margin(&ROOM, 1));
    }

    #[test]
    fn huge_margin_saturates_instead_of_wrapping() {
        let far = Room { x: 40, z: 40, width: 2, length: 2 };
        assert!(ROOM.overlaps_with_margin(&far, usize::MAX));
        assert!(far.overlaps_with_margin(&ROOM, usize::MAX));
    }
}
