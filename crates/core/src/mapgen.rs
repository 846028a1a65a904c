//! Procedural cave generation split into carving, banded seeding and hazard placement.

pub mod model;
pub mod progression;
pub mod seed;

mod generator;
mod layout;
mod spawns;

use crate::config::CaveConfig;
use crate::error::GenerateError;

pub use generator::CaveGenerator;
pub use model::{GeneratedLevel, TunnelSpan};
pub use progression::{DEPTH_BANDS, DepthBand, MineralSeeding, band_for_depth, is_boss_level};
pub use seed::{RandomStream, derive_level_seed};

pub fn generate_level(
    run_seed: u64,
    depth: u32,
    config: &CaveConfig,
) -> Result<GeneratedLevel, GenerateError> {
    Ok(CaveGenerator::new(run_seed, config)?.generate(depth))
}
