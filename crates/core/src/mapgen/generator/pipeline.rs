//! Level-construction pipeline that composes the mapgen steps.

use tracing::debug;

use crate::config::CaveConfig;
use crate::types::Pos;

use super::super::layout::{CarvedCave, carve_tunnels};
use super::super::model::GeneratedLevel;
use super::super::progression::{band_for_depth, is_boss_level};
use super::super::seed::RandomStream;
use super::super::spawns::seed_minerals;
use super::hazards::{place_chest, place_serpent};

pub(super) fn generate_level(
    config: &CaveConfig,
    stream: &mut RandomStream,
    depth: u32,
) -> GeneratedLevel {
    let CarvedCave { mut grid, tunnels, repairs } = carve_tunnels(config, stream);
    let band = band_for_depth(depth);

    let entry_span = tunnels[config.entry_row];
    let entry = Pos { y: config.entry_row as i32, x: entry_span.middle() as i32 };

    let boss_level = is_boss_level(depth, config.boss_interval);
    let (hazard, minerals) = if boss_level {
        (Some(place_serpent(&mut grid, config)), 0)
    } else {
        (None, seed_minerals(&mut grid, depth, band, stream))
    };
    let chest = place_chest(&mut grid, config, entry, stream);

    debug!(
        depth,
        band = band.name,
        minerals,
        boss_level,
        chest = chest.is_some(),
        repairs,
        "generated cave level"
    );

    GeneratedLevel {
        depth,
        band: band.name,
        grid,
        tunnels,
        entry,
        chest,
        hazard,
        hazard_active: boss_level,
        repairs,
    }
}
