//! Plain-text preview of a layout, top row first.

use dungeon_core::{DungeonLayout, TileType};

fn glyph(floor: TileType, wall: TileType, feature: TileType) -> char {
    match (feature, wall) {
        (TileType::Pillar, _) => 'O',
        (TileType::FloorProp, _) => '*',
        (_, TileType::Door) => '+',
        _ => match floor {
            TileType::Standard => '.',
            TileType::Room => ':',
            TileType::Enviro => '~',
            _ => ' ',
        },
    }
}

pub fn render(layout: &DungeonLayout) -> String {
    let mut out = String::with_capacity((layout.width() + 1) * layout.length());
    for z in (0..layout.length()).rev() {
        for x in 0..layout.width() {
            let floor = layout.floor()[(x, z)];
            let wall = layout.walls()[(x, z)];
            let feature = layout.features()[(x, z)];
            out.push(glyph(floor, wall, feature));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use dungeon_core::{DungeonConfig, generate_layout};

    use super::*;

    #[test]
    fn roomless_layout_renders_as_a_walled_enviro_field() {
        let config = DungeonConfig { number_of_rooms: Some(0), ..DungeonConfig::with_size(5, 5) };
        let layout = generate_layout(&config, 1).expect("valid config");
        assert_eq!(render(&layout), ".....\n.~~~.\n.~~~.\n.~~~.\n.....\n");
    }

    #[test]
    fn overlays_take_priority_over_floor() {
        assert_eq!(glyph(TileType::Room, TileType::Door, TileType::Empty), '+');
        assert_eq!(glyph(TileType::Room, TileType::Room, TileType::Pillar), 'O');
        assert_eq!(glyph(TileType::Room, TileType::Empty, TileType::FloorProp), '*');
        assert_eq!(glyph(TileType::Room, TileType::Room, TileType::Empty), ':');
    }
}
