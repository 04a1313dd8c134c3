//! Room rectangle placement and stamping onto the floor grid.

use tracing::debug;

use crate::config::{DungeonConfig, RoomParameters};
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::{Pos, TileType};

use super::model::{Room, RoomAttempt};

/// Floor tiles and door marks left behind by room placement.
pub(super) struct PlacedRooms {
    pub(super) floor: Grid<TileType>,
    pub(super) wall_marks: Grid<TileType>,
    pub(super) attempts: Vec<RoomAttempt>,
}

pub(super) fn place_rooms(config: &DungeonConfig, rng: &mut impl RandomSource) -> PlacedRooms {
    let width = config.dungeon_width;
    let length = config.dungeon_length;
    let RoomParameters { min_size, max_size } = config.room_params;
    let room_count = config.room_count();

    let mut placed = PlacedRooms {
        floor: Grid::new(width, length),
        wall_marks: Grid::new(width, length),
        attempts: Vec::with_capacity(room_count),
    };

    for attempt_index in 0..room_count {
        let room_width = rng.range(min_size, max_size);
        let room_length = rng.range(min_size, max_size);
        let x = rng.range(1, width.saturating_sub(room_width + 1));
        let z = rng.range(1, length.saturating_sub(room_length + 1));
        let room = Room { x, z, width: room_width, length: room_length };

        let accepted = is_room_position_valid(
            &placed.attempts,
            &room,
            width,
            length,
            config.min_distance_between_rooms,
        );
        if !accepted {
            debug!(attempt_index, ?room, "room rejected; stamping without doors");
        }

        let door = generate_room(&mut placed.floor, &mut placed.wall_marks, &room, accepted, rng);
        placed.attempts.push(RoomAttempt { room, accepted, door });
    }

    placed
}

pub(super) fn is_room_position_valid(
    attempts: &[RoomAttempt],
    candidate: &Room,
    grid_width: usize,
    grid_length: usize,
    margin: usize,
) -> bool {
    let overlaps_accepted = attempts
        .iter()
        .filter(|attempt| attempt.accepted)
        .any(|attempt| candidate.overlaps_with_margin(&attempt.room, margin));
    if overlaps_accepted {
        return false;
    }

    candidate.x >= 1
        && candidate.z >= 1
        && candidate.x + candidate.width < grid_width
        && candidate.z + candidate.length < grid_length
}

/// Stamps `room` as floor and returns the door cell, if one was placed.
pub(super) fn generate_room(
    floor: &mut Grid<TileType>,
    wall_marks: &mut Grid<TileType>,
    room: &Room,
    add_doors: bool,
    rng: &mut impl RandomSource,
) -> Option<Pos> {
    let mut door_candidates = Vec::new();
    for pos in room.cells() {
        floor[(pos.x, pos.z)] = TileType::Room;
        if wall_marks[(pos.x, pos.z)] != TileType::Door {
            wall_marks[(pos.x, pos.z)] = TileType::Room;
        }
        if add_doors && room.is_edge(pos) && !room.is_corner(pos) {
            door_candidates.push(pos);
        }
    }

    if door_candidates.is_empty() {
        return None;
    }
    let door = door_candidates[rng.range(0, door_candidates.len())];
    wall_marks[(door.x, door.z)] = TileType::Door;
    Some(door)
}
