use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{DungeonConfig, DungeonLayout, DungeonSession};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod ascii;
mod config_file;
mod seed;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with generation parameters; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    length: Option<usize>,
    /// Room attempts; omitted means one per 30 cells
    #[arg(long)]
    rooms: Option<usize>,
    #[arg(long)]
    min_size: Option<usize>,
    /// Exclusive upper bound of the room size draw
    #[arg(long)]
    max_size: Option<usize>,
    #[arg(long)]
    min_distance: Option<usize>,
    /// Run seed; a fresh one is generated when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Extra layouts to generate after the first
    #[arg(short, long, default_value_t = 0)]
    regenerate: u32,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct LayoutReport<'a> {
    run_seed: u64,
    generation: u64,
    fingerprint: String,
    layout: &'a DungeonLayout,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let run_seed = args.seed.unwrap_or_else(seed::generate_runtime_seed);
    tracing::info!(run_seed, ?config, "generating dungeon");

    let mut session = DungeonSession::new(config, run_seed)
        .with_context(|| "Configuration rejected before generation")?;
    print_layout(&session, args.format)?;
    for _ in 0..args.regenerate {
        session.regenerate();
        print_layout(&session, args.format)?;
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<DungeonConfig> {
    let mut config = match &args.config {
        Some(path) => config_file::load_config(path)?,
        None => DungeonConfig::default(),
    };

    if let Some(width) = args.width {
        config.dungeon_width = width;
    }
    if let Some(length) = args.length {
        config.dungeon_length = length;
    }
    if let Some(rooms) = args.rooms {
        config.number_of_rooms = Some(rooms);
    }
    if let Some(min_size) = args.min_size {
        config.room_params.min_size = min_size;
    }
    if let Some(max_size) = args.max_size {
        config.room_params.max_size = max_size;
    }
    if let Some(min_distance) = args.min_distance {
        config.min_distance_between_rooms = min_distance;
    }
    Ok(config)
}

fn print_layout(session: &DungeonSession, format: OutputFormat) -> Result<()> {
    let layout = session.current();
    match format {
        OutputFormat::Ascii => {
            println!(
                "Generation {} (seed {}, fingerprint 0x{:016x})",
                session.generation(),
                session.run_seed(),
                layout.fingerprint()
            );
            print!("{}", ascii::render(layout));
        }
        OutputFormat::Json => {
            let report = LayoutReport {
                run_seed: session.run_seed(),
                generation: session.generation(),
                fingerprint: format!("0x{:016x}", layout.fingerprint()),
                layout,
            };
            let json = serde_json::to_string(&report)
                .with_context(|| "Failed to serialize layout JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}
