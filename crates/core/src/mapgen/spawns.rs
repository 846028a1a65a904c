//! Depth-banded mineral seeding over carved rock.

use crate::grid::Grid;
use crate::types::Cell;

use super::progression::{DepthBand, MineralSeeding, tier_range, tiered_minerals};
use super::seed::RandomStream;

/// Rolls every `Stone` cell against the band's rules. Air and anything already placed is
/// left alone. Returns the number of minerals placed.
pub(super) fn seed_minerals(
    grid: &mut Grid,
    depth: u32,
    band: &DepthBand,
    stream: &mut RandomStream,
) -> usize {
    let mut placed = 0;
    for pos in grid.positions() {
        if !grid[pos].is_rock() {
            continue;
        }
        if let Some(mineral) = roll_mineral(band.seeding, depth, stream) {
            grid[pos] = mineral;
            placed += 1;
        }
    }
    placed
}

fn roll_mineral(seeding: MineralSeeding, depth: u32, stream: &mut RandomStream) -> Option<Cell> {
    match seeding {
        MineralSeeding::Single { mineral, one_in } => stream.one_in(one_in).then_some(mineral),
        MineralSeeding::Competing(rolls) => {
            rolls.iter().find(|&&(_, one_in)| stream.one_in(one_in)).map(|&(mineral, _)| mineral)
        }
        MineralSeeding::Tiered { primary_one_in, secondary_one_in } => {
            let (primary, secondary) = tiered_minerals(depth);
            if stream.one_in(primary_one_in) {
                Some(primary)
            } else if stream.one_in(secondary_one_in) {
                Some(secondary)
            } else {
                None
            }
        }
        MineralSeeding::HighTier { one_in, lowest, highest } => {
            if stream.one_in(one_in) { stream.pick(tier_range(lowest, highest)) } else { None }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::mapgen::progression::band_for_depth;
    use crate::types::Pos;

    fn tally(grid: &Grid) -> BTreeMap<Cell, usize> {
        let mut counts = BTreeMap::new();
        for &cell in grid.cells() {
            *counts.entry(cell).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn deep_band_only_places_high_tier_minerals_at_about_one_in_eight() {
        let mut grid = Grid::filled(200, Cell::Stone);
        let mut stream = RandomStream::new(100);
        let placed = seed_minerals(&mut grid, 100, band_for_depth(100), &mut stream);

        let allowed = tier_range(Cell::Diamond, Cell::Thorium);
        for (cell, count) in tally(&grid) {
            if cell != Cell::Stone {
                assert!(allowed.contains(&cell), "{count} unexpected {cell:?} cells at depth 100");
            }
        }
        let total = 200 * 200;
        let expected = total / 8;
        assert!(
            placed.abs_diff(expected) < expected / 10,
            "placed {placed} minerals, expected about {expected}"
        );
    }

    #[test]
    fn shallow_band_places_only_iron() {
        let mut grid = Grid::filled(100, Cell::Stone);
        let placed = seed_minerals(&mut grid, 2, band_for_depth(2), &mut RandomStream::new(4));
        assert_eq!(grid.count(Cell::Iron), placed);
        assert_eq!(grid.count(Cell::Stone) + placed, 100 * 100);
        let expected = 100 * 100 / 31;
        assert!(placed.abs_diff(expected) < expected / 4, "placed {placed}, expected ~{expected}");
    }

    #[test]
    fn upper_band_favours_first_roll() {
        let mut grid = Grid::filled(120, Cell::Stone);
        seed_minerals(&mut grid, 5, band_for_depth(5), &mut RandomStream::new(8));
        let coal = grid.count(Cell::Coal);
        let iron = grid.count(Cell::Iron);
        assert!(coal > iron * 2, "coal {coal} should clearly outnumber iron {iron}");
        assert!(iron > 0);
    }

    #[test]
    fn tiered_band_uses_depth_selected_pair() {
        let mut grid = Grid::filled(120, Cell::Stone);
        seed_minerals(&mut grid, 23, band_for_depth(23), &mut RandomStream::new(23));
        let counts = tally(&grid);
        let found: Vec<Cell> = counts.keys().copied().filter(|&cell| cell != Cell::Stone).collect();
        assert_eq!(found, vec![Cell::Gold, Cell::Diamond]);
        assert!(counts[&Cell::Gold] > counts[&Cell::Diamond]);
    }

    #[test]
    fn minerals_never_replace_air_or_existing_features() {
        let mut grid = Grid::filled(40, Cell::Stone);
        for x in 0..40 {
            grid[Pos { y: 7, x }] = Cell::Air;
        }
        grid[Pos { y: 3, x: 3 }] = Cell::Chest;
        let before = grid.clone();

        seed_minerals(&mut grid, 100, band_for_depth(100), &mut RandomStream::new(9));

        for pos in grid.positions() {
            if grid[pos] != before[pos] {
                assert_eq!(before[pos], Cell::Stone, "{pos:?} was not rock before seeding");
                assert!(grid[pos].is_mineral());
            }
        }
        assert_eq!(grid[Pos { y: 3, x: 3 }], Cell::Chest);
        assert!(grid.row(7).iter().all(|cell| cell.is_air()));
    }
}
