//! Whole-state consistency checks used by soak runs and tests.

use super::*;

impl Game {
    /// Returns the first broken world or player invariant, if any.
    pub fn check_invariants(&self) -> Result<(), String> {
        let grid = &self.level.grid;
        let player = &self.player;
        let survival = &self.config.survival;

        if grid.size() != self.config.cave.size {
            return Err(format!("grid size {} != configured {}", grid.size(), self.config.cave.size));
        }
        if !grid.contains(player.pos) {
            return Err(format!("player at {:?} is off the grid", player.pos));
        }
        if !grid[player.pos].is_air() {
            return Err(format!("player at {:?} stands inside {:?}", player.pos, grid[player.pos]));
        }
        if player.health > survival.max_health {
            return Err(format!("health {} above max {}", player.health, survival.max_health));
        }
        if player.hunger > survival.max_hunger {
            return Err(format!("hunger {} above max {}", player.hunger, survival.max_hunger));
        }
        if (player.health == 0) != self.outcome.is_some() {
            return Err(format!(
                "health {} disagrees with outcome {:?}",
                player.health, self.outcome
            ));
        }
        if let Some((cell, _)) = player.inventory.iter().find(|&(cell, _)| !cell.is_collectible()) {
            return Err(format!("inventory holds non-collectible {cell:?}"));
        }
        for (y, pair) in self.level.tunnels.windows(2).enumerate() {
            if !pair[0].overlaps(pair[1]) {
                return Err(format!("tunnel rows {y} and {} are disjoint", y + 1));
            }
        }
        Ok(())
    }
}
