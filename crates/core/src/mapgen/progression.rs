//! Depth bands: which minerals may be seeded at which depth, and which levels hold a boss.
//!
//! The bands are plain data so each one can be tested on its own and new bands only need a
//! new table row.

use serde::Serialize;

use crate::content::MINERAL_TIERS;
use crate::types::Cell;

/// How rock cells of one band turn into minerals. Every rule only ever replaces `Stone`,
/// and the first successful roll on a cell wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MineralSeeding {
    /// One mineral at a fixed chance per rock cell.
    Single { mineral: Cell, one_in: u32 },
    /// Several minerals rolled in order.
    Competing(&'static [(Cell, u32)]),
    /// Primary and secondary minerals chosen from [`MINERAL_TIERS`] by `depth / 10`.
    Tiered { primary_one_in: u32, secondary_one_in: u32 },
    /// Any mineral of the inclusive tier range, uniformly.
    HighTier { one_in: u32, lowest: Cell, highest: Cell },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DepthBand {
    pub name: &'static str,
    pub min_depth: u32,
    /// Exclusive upper bound; `None` for the open-ended deepest band.
    pub max_depth: Option<u32>,
    pub seeding: MineralSeeding,
}

impl DepthBand {
    pub fn contains(&self, depth: u32) -> bool {
        depth >= self.min_depth && self.max_depth.is_none_or(|max| depth < max)
    }
}

pub static DEPTH_BANDS: [DepthBand; 4] = [
    DepthBand {
        name: "shallow",
        min_depth: 0,
        max_depth: Some(4),
        seeding: MineralSeeding::Single { mineral: Cell::Iron, one_in: 31 },
    },
    DepthBand {
        name: "upper",
        min_depth: 4,
        max_depth: Some(8),
        seeding: MineralSeeding::Competing(&[(Cell::Coal, 21), (Cell::Iron, 61)]),
    },
    DepthBand {
        name: "tiered",
        min_depth: 8,
        max_depth: Some(50),
        seeding: MineralSeeding::Tiered { primary_one_in: 30, secondary_one_in: 60 },
    },
    DepthBand {
        name: "deep",
        min_depth: 50,
        max_depth: None,
        seeding: MineralSeeding::HighTier {
            one_in: 8,
            lowest: Cell::Diamond,
            highest: Cell::Thorium,
        },
    },
];

pub fn band_for_depth(depth: u32) -> &'static DepthBand {
    DEPTH_BANDS
        .iter()
        .find(|band| band.contains(depth))
        .unwrap_or(&DEPTH_BANDS[DEPTH_BANDS.len() - 1])
}

/// Depth 0 is never a boss level, even though it is a multiple of every interval.
pub fn is_boss_level(depth: u32, boss_interval: u32) -> bool {
    depth > 0 && boss_interval > 0 && depth % boss_interval == 0
}

/// Primary and secondary minerals of the tiered band at `depth`.
pub(super) fn tiered_minerals(depth: u32) -> (Cell, Cell) {
    let last = MINERAL_TIERS.len() - 1;
    let primary = ((depth / 10) as usize).min(last - 1);
    (MINERAL_TIERS[primary], MINERAL_TIERS[primary + 1])
}

/// Minerals between `lowest` and `highest` in tier order, both included.
pub(super) fn tier_range(lowest: Cell, highest: Cell) -> &'static [Cell] {
    let start = MINERAL_TIERS.iter().position(|&cell| cell == lowest).unwrap_or(0);
    let end = MINERAL_TIERS
        .iter()
        .position(|&cell| cell == highest)
        .unwrap_or(MINERAL_TIERS.len() - 1);
    &MINERAL_TIERS[start..=end.max(start)]
}
