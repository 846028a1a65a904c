//! One game run: the current level, the player, and the turn cycle that mutates them.
//!
//! Every intent is applied synchronously and followed by the survival tick before the next
//! intent is accepted. Nothing outside [`Game::apply`] and [`Game::descend`] mutates the grid
//! or the player.

use tracing::info;

use crate::config::GameConfig;
use crate::error::{ActionError, GenerateError};
use crate::grid::Grid;
use crate::mapgen::seed::mix_seed_stream;
use crate::mapgen::{CaveGenerator, GeneratedLevel, RandomStream};
use crate::state::PlayerState;
use crate::types::*;

mod actions;
mod hash;
mod invariants;
mod survival;


/// Stream id for draws made while acting (chest loot), kept apart from level generation.
const ACTION_STREAM: u64 = 1;

pub struct Game {
    seed: u64,
    config: GameConfig,
    generator: CaveGenerator,
    level: GeneratedLevel,
    player: PlayerState,
    stream: RandomStream,
    log: Vec<LogEvent>,
    outcome: Option<RunOutcome>,
}

impl Game {
    pub fn new(seed: u64, config: &GameConfig) -> Result<Self, GenerateError> {
        Self::with_depth(seed, 0, config)
    }

    /// Starts a run with the player at the entry of `depth`.
    pub fn with_depth(seed: u64, depth: u32, config: &GameConfig) -> Result<Self, GenerateError> {
        config.survival.check().map_err(GenerateError::InvalidConfig)?;
        let generator = CaveGenerator::new(seed, &config.cave)?;
        let level = generator.generate(depth);
        let player = PlayerState::new(level.entry, &config.survival);
        info!(seed, depth, band = level.band, "run started");

        Ok(Self {
            seed,
            config: config.clone(),
            generator,
            level,
            player,
            stream: RandomStream::new(mix_seed_stream(seed, ACTION_STREAM)),
            log: Vec::new(),
            outcome: None,
        })
    }

    /// Applies one intent and then the survival tick. `Help` is informational and does
    /// neither.
    pub fn apply(&mut self, intent: Intent) -> Result<TurnReport, ActionError> {
        self.ensure_running()?;
        let first_event = self.log.len();

        match intent {
            Intent::Move(direction) => self.apply_move(direction),
            Intent::Mine => self.apply_mine(),
            Intent::OpenChest => self.apply_open_chest(),
            // Combat is not modelled; the swing still costs a turn.
            Intent::Attack | Intent::Help => {}
        }
        if intent.consumes_turn() {
            self.tick_survival();
        }

        Ok(self.report_since(first_event))
    }

    /// Moves the run one level deeper. The player keeps inventory, health, hunger and turns
    /// and is placed on the new level's entry.
    pub fn descend(&mut self) -> Result<TurnReport, ActionError> {
        self.ensure_running()?;
        let first_event = self.log.len();

        let depth = self.level.depth.saturating_add(1);
        self.level = self.generator.generate(depth);
        self.player.pos = self.level.entry;
        self.log.push(LogEvent::Descended { depth });
        info!(
            depth,
            band = self.level.band,
            hazard_active = self.level.hazard_active,
            "descended"
        );

        Ok(self.report_since(first_event))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.level.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn depth(&self) -> u32 {
        self.level.depth
    }

    pub fn level(&self) -> &GeneratedLevel {
        &self.level
    }

    pub fn hazard_active(&self) -> bool {
        self.level.hazard_active
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn current_turn(&self) -> u64 {
        self.player.turns
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    fn ensure_running(&self) -> Result<(), ActionError> {
        match self.outcome {
            Some(outcome) => Err(ActionError::RunFinished(outcome)),
            None => Ok(()),
        }
    }

    fn report_since(&self, first_event: usize) -> TurnReport {
        TurnReport { events: self.log[first_event..].to_vec(), outcome: self.outcome }
    }
}
