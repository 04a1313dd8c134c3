//! TOML-backed generation settings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon_core::DungeonConfig;

pub fn load_config(path: &Path) -> Result<DungeonConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
