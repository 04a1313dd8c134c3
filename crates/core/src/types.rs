use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TileType {
    #[default]
    Empty,
    Standard,
    Room,
    Door,
    Enviro,
    FloorProp,
    Pillar,
}

impl TileType {
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Standard => 1,
            Self::Room => 2,
            Self::Door => 3,
            Self::Enviro => 4,
            Self::FloorProp => 5,
            Self::Pillar => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: usize,
    pub z: usize,
}

/// Edge of a cell, named from the cell's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

    pub fn offset(self) -> (i64, i64) {
        match self {
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
            Side::Bottom => (0, -1),
            Side::Top => (0, 1),
        }
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Top => 3,
        }
    }
}
