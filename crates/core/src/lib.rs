pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod grid;
pub mod mapgen;
pub mod state;
pub mod types;

pub use config::{Bounds, CaveConfig, GameConfig, SurvivalConfig};
pub use content::{CellInfo, cell_info};
pub use error::{ActionError, ConfigError, GenerateError, GridError};
pub use game::Game;
pub use grid::Grid;
pub use mapgen::{CaveGenerator, GeneratedLevel, RandomStream, TunnelSpan, derive_level_seed};
pub use state::{Inventory, PlayerState};
pub use types::*;
