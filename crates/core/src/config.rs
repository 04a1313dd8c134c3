//! Generation parameters and their fail-fast validation.

use serde::{Deserialize, Serialize};

use crate::error::{DungeonError, Result};

pub const MIN_DUNGEON_SIDE: usize = 5;
/// One room per this many cells when the room count is area-driven.
pub const CELLS_PER_ROOM: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomParameters {
    pub min_size: usize,
    /// Exclusive upper bound of the size draw.
    pub max_size: usize,
}

impl Default for RoomParameters {
    fn default() -> Self {
        Self { min_size: 3, max_size: 5 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub dungeon_width: usize,
    pub dungeon_length: usize,
    pub room_params: RoomParameters,
    /// `None` derives the count from the grid area.
    pub number_of_rooms: Option<usize>,
    pub min_distance_between_rooms: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            dungeon_width: 10,
            dungeon_length: 10,
            room_params: RoomParameters::default(),
            number_of_rooms: None,
            min_distance_between_rooms: 1,
        }
    }
}

impl DungeonConfig {
    pub fn with_size(dungeon_width: usize, dungeon_length: usize) -> Self {
        Self { dungeon_width, dungeon_length, ..Self::default() }
    }

    pub fn room_count(&self) -> usize {
        self.number_of_rooms
            .unwrap_or(self.dungeon_width.saturating_mul(self.dungeon_length) / CELLS_PER_ROOM)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dungeon_width < MIN_DUNGEON_SIDE || self.dungeon_length < MIN_DUNGEON_SIDE {
            return Err(DungeonError::invalid(format!(
                "dungeon must be at least {MIN_DUNGEON_SIDE}x{MIN_DUNGEON_SIDE}, got {}x{}",
                self.dungeon_width, self.dungeon_length
            )));
        }

        if self.dungeon_width.checked_mul(self.dungeon_length).is_none() {
            return Err(DungeonError::invalid(format!(
                "dungeon area {}x{} overflows the cell index",
                self.dungeon_width, self.dungeon_length
            )));
        }

        let RoomParameters { min_size, max_size } = self.room_params;
        if min_size < 1 {
            return Err(DungeonError::invalid("room min_size must be at least 1"));
        }
        if min_size >= max_size {
            return Err(DungeonError::invalid(format!(
                "room min_size ({min_size}) must be below max_size ({max_size})"
            )));
        }

        let largest_room = max_size - 1;
        let narrowest_side = self.dungeon_width.min(self.dungeon_length);
        if largest_room + 2 > narrowest_side {
            return Err(DungeonError::invalid(format!(
                "rooms up to {largest_room} tiles plus margin do not fit a side of {narrowest_side}"
            )));
        }

        Ok(())
    }
}
