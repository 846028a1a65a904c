//! Tunable parameters for cave generation and survival, loadable from TOML.
//!
//! Every section is `#[serde(default)]`, so a file only has to name the values it overrides:
//!
//! ```toml
//! [cave]
//! size = 20
//!
//! [survival]
//! hunger_interval = 8
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Pos;

/// Inclusive `min..=max` range as it appears in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Bounds<T> {
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cave: CaveConfig,
    pub survival: SurvivalConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    /// Side length of the square grid.
    pub size: usize,
    pub tunnel_width: Bounds<usize>,
    /// Lateral drift added to the previous row's offset.
    pub drift: Bounds<i32>,
    pub min_offset: i32,
    /// Offset used when a drifting tunnel falls below `min_offset`.
    pub reset_offset: i32,
    pub entry_row: usize,
    pub chest_one_in: u32,
    pub boss_interval: u32,
    pub hazard_pos: Pos,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            size: 16,
            tunnel_width: Bounds { min: 8, max: 9 },
            drift: Bounds { min: -1, max: 2 },
            min_offset: 1,
            reset_offset: 2,
            entry_row: 5,
            chest_one_in: 8,
            boss_interval: 10,
            hazard_pos: Pos { y: 3, x: 11 },
        }
    }
}

impl CaveConfig {
    /// Checks that carving can always fit a tunnel and keep consecutive rows connected.
    pub fn check(&self) -> Result<(), String> {
        if self.size < 4 {
            return Err(format!("size {} is below the minimum of 4", self.size));
        }
        if self.tunnel_width.min == 0 || self.tunnel_width.min > self.tunnel_width.max {
            return Err(format!(
                "tunnel_width {}..={} must be a non-empty positive range",
                self.tunnel_width.min, self.tunnel_width.max
            ));
        }
        if self.drift.min > self.drift.max {
            return Err(format!("drift {}..={} is empty", self.drift.min, self.drift.max));
        }
        // A row's offset moves at most this far from the row above, including the
        // right-wall jitter, so it must stay below the narrowest tunnel.
        let max_step = self.drift.min.unsigned_abs().max(self.drift.max.unsigned_abs()) as usize;
        if max_step >= self.tunnel_width.min {
            return Err(format!(
                "drift step {max_step} must be smaller than the narrowest tunnel ({})",
                self.tunnel_width.min
            ));
        }
        if self.min_offset < 0 || self.reset_offset < self.min_offset {
            return Err(format!(
                "offsets must satisfy 0 <= min_offset ({}) <= reset_offset ({})",
                self.min_offset, self.reset_offset
            ));
        }
        let reset_jump = (self.reset_offset - self.min_offset) as usize;
        if reset_jump >= self.tunnel_width.min {
            return Err(format!(
                "reset_offset jumps {reset_jump} past min_offset; must be below {}",
                self.tunnel_width.min
            ));
        }
        if self.reset_offset as usize + self.tunnel_width.max > self.size - 1 {
            return Err(format!(
                "a {}-wide tunnel at offset {} does not fit a {}-cell row",
                self.tunnel_width.max, self.reset_offset, self.size
            ));
        }
        if self.entry_row >= self.size {
            return Err(format!("entry_row {} is outside the grid", self.entry_row));
        }
        let hazard = self.hazard_pos;
        let size = self.size as i32;
        if !(0..size).contains(&hazard.x) || !(0..size).contains(&hazard.y) {
            return Err(format!("hazard_pos ({}, {}) is outside the grid", hazard.x, hazard.y));
        }
        if hazard.y as usize == self.entry_row {
            return Err("hazard_pos must not share the entry row".to_string());
        }
        if self.chest_one_in == 0 || self.boss_interval == 0 {
            return Err("chest_one_in and boss_interval must be positive".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalConfig {
    pub max_health: u32,
    pub max_hunger: u32,
    /// Turns between hunger drops while the player is not starving.
    pub hunger_interval: u64,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self { max_health: 30, max_hunger: 15, hunger_interval: 12 }
    }
}

impl SurvivalConfig {
    pub fn check(&self) -> Result<(), String> {
        if self.max_health == 0 || self.max_hunger == 0 || self.hunger_interval == 0 {
            return Err("max_health, max_hunger and hunger_interval must be positive".to_string());
        }
        Ok(())
    }
}

impl GameConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cave.check().map_err(ConfigError::Invalid)?;
        self.survival.check().map_err(ConfigError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, tempdir};

    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.cave.size, 16);
        assert_eq!(config.cave.tunnel_width, Bounds { min: 8, max: 9 });
        assert_eq!(config.cave.drift, Bounds { min: -1, max: 2 });
        assert_eq!(config.survival.max_health, 30);
        assert_eq!(config.survival.max_hunger, 15);
        assert_eq!(config.survival.hunger_interval, 12);
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn partial_file_overrides_only_named_values() {
        let config = GameConfig::from_toml_str(
            r#"
            [cave]
            size = 24

            [survival]
            hunger_interval = 6
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.cave.size, 24);
        assert_eq!(config.cave.tunnel_width, CaveConfig::default().tunnel_width);
        assert_eq!(config.survival.hunger_interval, 6);
        assert_eq!(config.survival.max_health, 30);
    }

    #[test]
    fn rejects_grid_too_small_for_tunnel() {
        let err = GameConfig::from_toml_str("[cave]\nsize = 8\n").expect_err("8 is too small");
        assert!(matches!(err, ConfigError::Invalid(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn rejects_drift_wider_than_tunnel() {
        let err = GameConfig::from_toml_str("[cave]\ndrift = { min = -8, max = 8 }\n")
            .expect_err("a drift step of 8 skips past an 8-wide tunnel");
        assert!(err.to_string().contains("drift step"), "unexpected message: {err}");
    }

    #[test]
    fn rejects_one_sided_drift_as_wide_as_the_tunnel() {
        let err = GameConfig::from_toml_str(
            "[cave]\ndrift = { min = 5, max = 6 }\ntunnel_width = { min = 2, max = 2 }\n",
        )
        .expect_err("a narrow span of large steps still disconnects rows");
        assert!(err.to_string().contains("drift step 6"), "unexpected message: {err}");
    }

    #[test]
    fn rejects_reset_further_than_a_tunnel_width() {
        let err = GameConfig::from_toml_str(
            "[cave]\ntunnel_width = { min = 2, max = 2 }\ndrift = { min = -1, max = 1 }\n\
             min_offset = 1\nreset_offset = 3\n",
        )
        .expect_err("reset jump of 2 equals the tunnel width");
        assert!(err.to_string().contains("reset_offset"), "unexpected message: {err}");
    }

    #[test]
    fn rejects_zero_hunger_interval() {
        let err = GameConfig::from_toml_str("[survival]\nhunger_interval = 0\n")
            .expect_err("zero interval is invalid");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("[cave\nsize = ").expect_err("broken toml");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[cave]\nchest_one_in = 2\nhazard_pos = {{ y = 4, x = 9 }}")
            .expect("write config");

        let config = GameConfig::load(file.path()).expect("config should load");
        assert_eq!(config.cave.chest_one_in, 2);
        assert_eq!(config.cave.hazard_pos, Pos { y: 4, x: 9 });
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");
        let err = GameConfig::load(&path).expect_err("file does not exist");
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
