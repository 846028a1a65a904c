//! High-level cave generation: owns the run seed and the validated cave config.

mod hazards;
mod pipeline;

use crate::config::CaveConfig;
use crate::error::GenerateError;

use super::model::GeneratedLevel;
use super::seed::{RandomStream, derive_level_seed};

pub struct CaveGenerator {
    run_seed: u64,
    config: CaveConfig,
}

impl CaveGenerator {
    pub fn new(run_seed: u64, config: &CaveConfig) -> Result<Self, GenerateError> {
        config.check().map_err(GenerateError::InvalidConfig)?;
        Ok(Self { run_seed, config: config.clone() })
    }

    /// Generates `depth` from its own derived stream, so a depth always comes out the same
    /// for a given run seed.
    pub fn generate(&self, depth: u32) -> GeneratedLevel {
        let mut stream = RandomStream::new(derive_level_seed(self.run_seed, depth));
        self.generate_with(&mut stream, depth)
    }

    /// Generates `depth` drawing from a caller-owned stream.
    pub fn generate_with(&self, stream: &mut RandomStream, depth: u32) -> GeneratedLevel {
        pipeline::generate_level(&self.config, stream, depth)
    }
}
