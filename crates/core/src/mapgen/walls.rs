//! Wall and door derivation from the settled floor classification.

use crate::grid::Grid;
use crate::types::{Pos, Side, TileType};

use super::model::{WallKind, WallSegment};

pub(super) struct DerivedWalls {
    pub(super) grid: Grid<TileType>,
    pub(super) segments: Vec<WallSegment>,
}

/// `wall_marks` carries the door cells chosen during room placement.
pub(super) fn derive_walls(floor: &Grid<TileType>, wall_marks: &Grid<TileType>) -> DerivedWalls {
    let mut derived = DerivedWalls {
        grid: Grid::new(floor.width(), floor.length()),
        segments: Vec::new(),
    };

    add_boundary_walls(floor, &mut derived);
    add_room_walls(floor, wall_marks, &mut derived);
    add_enviro_walls(floor, &mut derived);

    derived
}

fn add_boundary_walls(floor: &Grid<TileType>, derived: &mut DerivedWalls) {
    for pos in floor.positions().filter(|pos| floor.is_border(pos.x, pos.z)) {
        derived.grid[(pos.x, pos.z)] = TileType::Standard;
        for side in Side::ALL {
            let (dx, dz) = side.offset();
            if floor.neighbor(pos.x, pos.z, dx, dz).is_none() {
                derived.segments.push(WallSegment { pos, side, kind: WallKind::Boundary });
            }
        }
    }
}

fn add_room_walls(
    floor: &Grid<TileType>,
    wall_marks: &Grid<TileType>,
    derived: &mut DerivedWalls,
) {
    for pos in floor.positions() {
        if floor.is_border(pos.x, pos.z) {
            continue;
        }
        let has_door = wall_marks[(pos.x, pos.z)] == TileType::Door;
        match floor[(pos.x, pos.z)] {
            TileType::Room => {
                let kind = if has_door { WallKind::Door } else { WallKind::Room };
                let exposed = push_exposed_edges(floor, pos, TileType::Room, kind, derived);
                if has_door {
                    derived.grid[(pos.x, pos.z)] = TileType::Door;
                } else if exposed > 0 {
                    derived.grid[(pos.x, pos.z)] = TileType::Room;
                }
            }
            TileType::Standard if has_door => derived.grid[(pos.x, pos.z)] = TileType::Door,
            _ => {}
        }
    }
}

fn add_enviro_walls(floor: &Grid<TileType>, derived: &mut DerivedWalls) {
    for pos in floor.positions() {
        if floor[(pos.x, pos.z)] != TileType::Enviro {
            continue;
        }
        for side in Side::ALL {
            let (dx, dz) = side.offset();
            match floor.neighbor(pos.x, pos.z, dx, dz) {
                Some(neighbor) if neighbor != TileType::Enviro => {
                    derived.segments.push(WallSegment { pos, side, kind: WallKind::Enviro });
                }
                _ => {}
            }
        }
    }
}

/// Emits a segment on every edge whose neighbor is not `inside`; off-grid
/// neighbors count as outside. Returns how many were emitted.
fn push_exposed_edges(
    floor: &Grid<TileType>,
    pos: Pos,
    inside: TileType,
    kind: WallKind,
    derived: &mut DerivedWalls,
) -> usize {
    let mut emitted = 0;
    for side in Side::ALL {
        let (dx, dz) = side.offset();
        if floor.neighbor(pos.x, pos.z, dx, dz) != Some(inside) {
            derived.segments.push(WallSegment { pos, side, kind });
            emitted += 1;
        }
    }
    emitted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_kind(segments: &[WallSegment], kind: WallKind) -> usize {
        segments.iter().filter(|segment| segment.kind == kind).count()
    }

    fn room_block() -> (Grid<TileType>, Grid<TileType>) {
        let mut floor = Grid::filled(7, 7, TileType::Standard);
        let mut wall_marks = Grid::new(7, 7);
        for x in 2..=4 {
            for z in 2..=4 {
                floor[(x, z)] = TileType::Room;
                wall_marks[(x, z)] = TileType::Room;
            }
        }
        wall_marks[(3, 2)] = TileType::Door;
        (floor, wall_marks)
    }

    #[test]
    fn boundary_cells_carry_standard_walls_on_their_outer_edges() {
        let floor = Grid::filled(5, 6, TileType::Standard);
        let derived = derive_walls(&floor, &Grid::new(5, 6));

        for pos in floor.positions() {
            let expected =
                if floor.is_border(pos.x, pos.z) { TileType::Standard } else { TileType::Empty };
            assert_eq!(derived.grid[(pos.x, pos.z)], expected, "cell {pos:?}");
        }
        assert_eq!(count_kind(&derived.segments, WallKind::Boundary), 2 * 5 + 2 * 6);
        assert!(derived.segments.contains(&WallSegment {
            pos: Pos { x: 0, z: 0 },
            side: Side::Left,
            kind: WallKind::Boundary,
        }));
    }

    #[test]
    fn exposed_room_edges_become_walls_and_the_door_cell_a_door() {
        let (floor, wall_marks) = room_block();
        let derived = derive_walls(&floor, &wall_marks);

        assert_eq!(derived.grid[(3, 2)], TileType::Door);
        assert_eq!(derived.grid[(3, 3)], TileType::Empty);
        assert_eq!(derived.grid.count(TileType::Room), 7);
        assert_eq!(count_kind(&derived.segments, WallKind::Room), 11);
        assert_eq!(
            derived
                .segments
                .iter()
                .filter(|segment| segment.kind == WallKind::Door)
                .collect::<Vec<_>>(),
            vec![&WallSegment { pos: Pos { x: 3, z: 2 }, side: Side::Bottom, kind: WallKind::Door }]
        );
    }

    #[test]
    fn door_marks_follow_the_final_floor_type() {
        let (mut floor, wall_marks) = room_block();
        floor[(3, 2)] = TileType::Standard;
        let derived = derive_walls(&floor, &wall_marks);
        assert_eq!(derived.grid[(3, 2)], TileType::Door);

        floor[(3, 2)] = TileType::Enviro;
        let derived = derive_walls(&floor, &wall_marks);
        assert_eq!(derived.grid[(3, 2)], TileType::Empty);
        assert_eq!(count_kind(&derived.segments, WallKind::Door), 0);
    }

    #[test]
    fn enviro_tiles_are_walled_against_different_neighbors() {
        let mut floor = Grid::filled(7, 7, TileType::Standard);
        floor[(3, 3)] = TileType::Enviro;
        floor[(3, 4)] = TileType::Enviro;
        let derived = derive_walls(&floor, &Grid::new(7, 7));

        assert_eq!(count_kind(&derived.segments, WallKind::Enviro), 6);
        assert_eq!(derived.grid[(3, 3)], TileType::Empty);
    }
}
