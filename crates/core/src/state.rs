use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::SurvivalConfig;
use crate::types::{Cell, Pos};

/// Collected items keyed by cell tag. Iteration follows tag declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    counts: BTreeMap<Cell, u32>,
}

impl Inventory {
    /// Adds `n` of `cell`. Non-collectible tags are ignored.
    pub fn add(&mut self, cell: Cell, n: u32) {
        if !cell.is_collectible() {
            debug!(?cell, "ignoring non-collectible inventory add");
            return;
        }
        if n == 0 {
            return;
        }
        let count = self.counts.entry(cell).or_insert(0);
        *count = count.saturating_add(n);
    }

    pub fn count(&self, cell: Cell) -> u32 {
        self.counts.get(&cell).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&n| u64::from(n)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.counts.iter().map(|(&cell, &n)| (cell, n))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub pos: Pos,
    pub health: u32,
    pub hunger: u32,
    pub turns: u64,
    pub inventory: Inventory,
}

impl PlayerState {
    /// A fresh player standing on `pos` with full health and hunger.
    pub fn new(pos: Pos, survival: &SurvivalConfig) -> Self {
        Self {
            pos,
            health: survival.max_health,
            hunger: survival.max_hunger,
            turns: 0,
            inventory: Inventory::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
