//! Generation entry points: a one-shot generator and a regenerating session.

mod pipeline;

use tracing::debug;

use crate::config::DungeonConfig;
use crate::error::Result;
use crate::rng::{RandomSource, derive_generation_seed, seeded};

use super::model::DungeonLayout;

/// Validated configuration ready to produce layouts.
#[derive(Clone, Debug)]
pub struct DungeonGenerator {
    config: DungeonConfig,
}

impl DungeonGenerator {
    pub fn new(config: DungeonConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn generate(&self, rng: &mut impl RandomSource) -> DungeonLayout {
        pipeline::build_layout(&self.config, rng)
    }

    pub fn generate_from_seed(&self, seed: u64) -> DungeonLayout {
        self.generate(&mut seeded(seed))
    }
}

/// Holds the live layout and replaces it wholesale on every regeneration.
#[derive(Clone, Debug)]
pub struct DungeonSession {
    generator: DungeonGenerator,
    run_seed: u64,
    generation: u64,
    current: DungeonLayout,
}

impl DungeonSession {
    pub fn new(config: DungeonConfig, run_seed: u64) -> Result<Self> {
        let generator = DungeonGenerator::new(config)?;
        let current = generator.generate_from_seed(derive_generation_seed(run_seed, 0));
        Ok(Self { generator, run_seed, generation: 0, current })
    }

    pub fn config(&self) -> &DungeonConfig {
        self.generator.config()
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> &DungeonLayout {
        &self.current
    }

    pub fn regenerate(&mut self) -> &DungeonLayout {
        let generation = self.generation + 1;
        let layout =
            self.generator.generate_from_seed(derive_generation_seed(self.run_seed, generation));
        self.current = layout;
        self.generation = generation;
        debug!(generation, fingerprint = self.current.fingerprint(), "dungeon regenerated");
        &self.current
    }
}
