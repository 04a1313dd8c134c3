pub mod config;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod rng;
pub mod types;

pub use config::{DungeonConfig, RoomParameters};
pub use error::DungeonError;
pub use grid::Grid;
pub use mapgen::{
    Cell, DungeonGenerator, DungeonLayout, DungeonSession, Room, RoomAttempt, WallKind,
    WallSegment, generate_layout,
};
pub use rng::RandomSource;
pub use types::*;
