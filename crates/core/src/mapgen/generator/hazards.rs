//! Boss-level serpent placement and the occasional treasure chest.

use crate::config::CaveConfig;
use crate::grid::Grid;
use crate::types::{Cell, Pos};

use super::super::seed::RandomStream;

/// Puts the serpent on its fixed square, whatever was there.
pub(super) fn place_serpent(grid: &mut Grid, config: &CaveConfig) -> Pos {
    let pos = config.hazard_pos;
    grid[pos] = Cell::Serpent;
    pos
}

/// With probability `1 / chest_one_in`, turns one uniformly chosen air cell into a chest.
/// The entry cell is never used.
pub(super) fn place_chest(
    grid: &mut Grid,
    config: &CaveConfig,
    entry: Pos,
    stream: &mut RandomStream,
) -> Option<Pos> {
    if !stream.one_in(config.chest_one_in) {
        return None;
    }
    let candidates: Vec<Pos> =
        grid.positions().filter(|&pos| pos != entry && grid[pos].is_air()).collect();
    let pos = stream.pick(&candidates)?;
    grid[pos] = Cell::Chest;
    Some(pos)
}
