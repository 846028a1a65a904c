//! Public data models for generated cave levels.

use serde::Serialize;

use crate::grid::Grid;
use crate::types::{Cell, Pos};

/// Air run carved into one row: columns `start..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TunnelSpan {
    pub start: usize,
    pub end: usize,
}

impl TunnelSpan {
    pub fn width(self) -> usize {
        self.end - self.start
    }

    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn middle(self) -> usize {
        self.start + self.width() / 2
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedLevel {
    pub depth: u32,
    pub band: &'static str,
    pub grid: Grid,
    /// One span per row, top to bottom.
    pub tunnels: Vec<TunnelSpan>,
    pub entry: Pos,
    pub chest: Option<Pos>,
    pub hazard: Option<Pos>,
    /// Set on boss levels, where a serpent guards the tunnel.
    pub hazard_active: bool,
    /// Rows whose tunnel had to be widened to stay connected to the row above.
    pub repairs: u32,
}

impl GeneratedLevel {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.size() as u32).to_le_bytes());
        bytes.extend(self.depth.to_le_bytes());
        for &cell in self.grid.cells() {
            bytes.push(cell_code(cell));
        }
        for span in &self.tunnels {
            bytes.extend((span.start as u32).to_le_bytes());
            bytes.extend((span.end as u32).to_le_bytes());
        }
        bytes.extend(self.entry.y.to_le_bytes());
        bytes.extend(self.entry.x.to_le_bytes());
        for feature in [self.chest, self.hazard] {
            match feature {
                Some(pos) => {
                    bytes.push(1);
                    bytes.extend(pos.y.to_le_bytes());
                    bytes.extend(pos.x.to_le_bytes());
                }
                None => bytes.push(0),
            }
        }
        bytes.push(u8::from(self.hazard_active));
        bytes
    }

    /// Cell at `pos`, treating anything off the grid as solid rock.
    pub fn tile_at(&self, pos: Pos) -> Cell {
        self.grid.get(pos).unwrap_or(Cell::Stone)
    }
}

/// Stable byte for a cell tag; follows declaration order.
pub(crate) fn cell_code(cell: Cell) -> u8 {
    cell as u8
}
