//! Move, mine and chest interactions against the current level grid.

use std::collections::BTreeMap;

use tracing::debug;

use super::*;
use crate::content::CHEST_LOOT;

impl Game {
    /// Steps one cell if the destination is in bounds and open air; otherwise stays put.
    pub(super) fn apply_move(&mut self, direction: Direction) {
        let target = self.player.pos.step(direction);
        if self.level.tile_at(target).is_passable() {
            self.player.pos = target;
            self.log.push(LogEvent::Moved { to: target });
        } else {
            self.log.push(LogEvent::Blocked { target });
        }
    }

    /// Clears every mineable cell of the 3x3 block around the player, centre included, into
    /// the inventory.
    pub(super) fn apply_mine(&mut self) {
        let targets: Vec<Pos> = self.level.grid.neighbourhood(self.player.pos).collect();
        let mut mined: BTreeMap<Cell, u32> = BTreeMap::new();
        for pos in targets {
            let cell = self.level.grid[pos];
            // Entities such as the serpent are not consumed by mining.
            if !cell.is_mineable() {
                continue;
            }
            self.level.grid[pos] = Cell::Air;
            self.player.inventory.add(cell, 1);
            *mined.entry(cell).or_insert(0) += 1;
        }

        debug!(at = ?self.player.pos, kinds = mined.len(), "mined");
        for (cell, count) in mined {
            self.log.push(LogEvent::Mined { cell, count });
        }
    }

    /// Opens the first chest found in the 3x3 block and draws one reward from the loot table.
    pub(super) fn apply_open_chest(&mut self) {
        let grid = &self.level.grid;
        let Some(pos) = grid.neighbourhood(self.player.pos).find(|&pos| grid[pos] == Cell::Chest)
        else {
            return;
        };
        let Some(reward) = self.stream.pick(&CHEST_LOOT) else {
            return;
        };

        self.level.grid[pos] = Cell::Air;
        if self.level.chest == Some(pos) {
            self.level.chest = None;
        }
        self.player.inventory.add(reward, 1);
        self.log.push(LogEvent::ChestOpened { reward });
        debug!(?pos, ?reward, "chest opened");
    }
}
