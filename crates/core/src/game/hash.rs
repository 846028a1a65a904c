//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::mapgen::model::cell_code;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write(&self.level.canonical_bytes());

        let player = &self.player;
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.pos.y);
        hasher.write_u32(player.health);
        hasher.write_u32(player.hunger);
        hasher.write_u64(player.turns);
        for (cell, count) in player.inventory.iter() {
            hasher.write_u8(cell_code(cell));
            hasher.write_u32(count);
        }
        hasher.write_u8(match self.outcome {
            None => 0,
            Some(RunOutcome::Defeat(DeathCause::Starvation)) => 1,
        });
        hasher.finish()
    }
}
