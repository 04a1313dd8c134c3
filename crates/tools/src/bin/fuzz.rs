use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::rng::{mix_seed_stream, seeded};
use dungeon_core::{
    DungeonConfig, DungeonGenerator, DungeonLayout, RandomSource, RoomParameters, TileType,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    cases: u64,
}

fn random_config(rng: &mut impl RandomSource) -> DungeonConfig {
    let dungeon_width = rng.range(5, 48);
    let dungeon_length = rng.range(5, 48);
    let narrowest = dungeon_width.min(dungeon_length);
    let max_size = rng.range(2, narrowest);
    let min_size = rng.range(1, max_size);
    let number_of_rooms = if rng.percent_chance(25) { None } else { Some(rng.range(0, 40)) };
    DungeonConfig {
        dungeon_width,
        dungeon_length,
        room_params: RoomParameters { min_size, max_size },
        number_of_rooms,
        min_distance_between_rooms: rng.range(0, 3),
    }
}

fn check_invariants(layout: &DungeonLayout, margin: usize) -> Result<(), String> {
    for cell in layout.cells() {
        if cell.floor == TileType::Empty {
            return Err(format!("empty floor left at {:?}", cell.pos));
        }
        let on_border = layout.floor().is_border(cell.pos.x, cell.pos.z);
        if on_border && (cell.floor != TileType::Standard || cell.wall != TileType::Standard) {
            return Err(format!("border cell {:?} is {:?}/{:?}", cell.pos, cell.floor, cell.wall));
        }
        if cell.wall == TileType::Door && !matches!(cell.floor, TileType::Room | TileType::Standard)
        {
            return Err(format!("door over {:?} at {:?}", cell.floor, cell.pos));
        }
    }

    let accepted: Vec<_> = layout.accepted_rooms().collect();
    for (index, room) in accepted.iter().enumerate() {
        let too_close =
            accepted[index + 1..].iter().find(|other| room.overlaps_with_margin(other, margin));
        if let Some(other) = too_close {
            return Err(format!("accepted rooms too close: {room:?} vs {other:?}"));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} cases...", args.seed, args.cases);
    let mut config_rng = seeded(args.seed);
    let mut skipped = 0_u64;

    for case in 0..args.cases {
        let config = random_config(&mut config_rng);
        let Ok(generator) = DungeonGenerator::new(config.clone()) else {
            skipped += 1;
            continue;
        };

        let case_seed = mix_seed_stream(args.seed, case);
        let layout = generator.generate_from_seed(case_seed);
        if let Err(violation) = check_invariants(&layout, config.min_distance_between_rooms) {
            bail!("Invariant failed for case {case} (seed {case_seed}, {config:?}): {violation}");
        }
        if generator.generate_from_seed(case_seed) != layout {
            bail!("Layout not reproducible for case {case} (seed {case_seed})");
        }
    }

    println!("Fuzzing completed successfully ({skipped} invalid configs skipped).");
    Ok(())
}
