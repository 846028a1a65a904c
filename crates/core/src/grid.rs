//! Fixed-size square cell grid with strict bounds checking.
//!
//! Fallible access goes through [`Grid::get`] and [`Grid::set`]. Indexing with a [`Pos`]
//! is the programming-error path and panics on out-of-range positions instead of clamping.

use std::mem;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::types::{Cell, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(size: usize, cell: Cell) -> Self {
        Self { size, cells: vec![cell; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    pub fn get(&self, pos: Pos) -> Result<Cell, GridError> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    /// Writes `cell` at `pos` and returns what was there before.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<Cell, GridError> {
        let idx = self.index_of(pos)?;
        Ok(mem::replace(&mut self.cells[idx], cell))
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.size..(y + 1) * self.size]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        &mut self.cells[y * self.size..(y + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Row-major positions covering the whole grid.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Pos { y, x }))
    }

    /// In-bounds positions of the 3x3 block centred on `center`, centre included.
    pub fn neighbourhood(&self, center: Pos) -> impl Iterator<Item = Pos> + '_ {
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| Pos { y: center.y + dy, x: center.x + dx }))
            .filter(|&pos| self.contains(pos))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index_of(&self, pos: Pos) -> Result<usize, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds { pos, size: self.size });
        }
        Ok((pos.y as usize) * self.size + (pos.x as usize))
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Cell {
        match self.index_of(pos) {
            Ok(idx) => &self.cells[idx],
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Cell {
        match self.index_of(pos) {
            Ok(idx) => &mut self.cells[idx],
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_row_and_column_are_in_bounds_but_size_is_not() {
        let grid = Grid::filled(16, Cell::Stone);
        assert!(grid.contains(Pos { y: 15, x: 15 }));
        assert!(!grid.contains(Pos { y: 16, x: 0 }));
        assert!(!grid.contains(Pos { y: 0, x: 16 }));
        assert!(!grid.contains(Pos { y: -1, x: 3 }));
    }

    #[test]
    fn get_and_set_report_out_of_bounds() {
        let mut grid = Grid::filled(4, Cell::Stone);
        let outside = Pos { y: 4, x: 1 };
        assert_eq!(grid.get(outside), Err(GridError::OutOfBounds { pos: outside, size: 4 }));
        assert!(grid.set(outside, Cell::Air).is_err());
        assert_eq!(grid.count(Cell::Stone), 16);
    }

    #[test]
    fn set_returns_previous_cell() {
        let mut grid = Grid::filled(4, Cell::Stone);
        let pos = Pos { y: 2, x: 1 };
        assert_eq!(grid.set(pos, Cell::Gold), Ok(Cell::Stone));
        assert_eq!(grid.get(pos), Ok(Cell::Gold));
        assert_eq!(grid[pos], Cell::Gold);
        assert_eq!(grid.row(2)[1], Cell::Gold);
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 grid")]
    fn indexing_out_of_bounds_panics() {
        let grid = Grid::filled(4, Cell::Stone);
        let _cell = grid[Pos { y: 0, x: 4 }];
    }

    #[test]
    fn neighbourhood_is_clipped_at_corners() {
        let grid = Grid::filled(5, Cell::Air);
        assert_eq!(grid.neighbourhood(Pos { y: 0, x: 0 }).count(), 4);
        assert_eq!(grid.neighbourhood(Pos { y: 0, x: 2 }).count(), 6);
        let middle: Vec<Pos> = grid.neighbourhood(Pos { y: 2, x: 2 }).collect();
        assert_eq!(middle.len(), 9);
        assert!(middle.contains(&Pos { y: 2, x: 2 }));
    }

    #[test]
    fn positions_walk_row_major() {
        let grid = Grid::filled(3, Cell::Air);
        let positions: Vec<Pos> = grid.positions().collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], Pos { y: 0, x: 0 });
        assert_eq!(positions[1], Pos { y: 0, x: 1 });
        assert_eq!(positions[8], Pos { y: 2, x: 2 });
    }
}
