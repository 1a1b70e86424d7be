use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::state::CELL_SIZE;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation frames per second; also scales the special food timer
    pub frames_per_second: u32,
    /// Width of the playfield in units
    pub screen_width: i32,
    /// Height of the playfield in units
    pub screen_height: i32,
    /// Ordinary food spawned when the game starts
    pub initial_food: usize,
    /// Special food spawned when the game starts
    pub initial_special_food: usize,
    /// Score at which the game is won
    pub win_score: u32,
    /// Seconds the win screen stays up before the game exits
    pub win_screen_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 18,
            screen_width: 720,
            screen_height: 460,
            initial_food: 1,
            initial_special_food: 0,
            win_score: 100,
            win_screen_secs: 5,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom screen size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Default::default()
        }
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.frames_per_second = fps;
        self
    }

    /// Create a small playfield for testing
    pub fn small() -> Self {
        Self::new(200, 100)
    }

    /// Read a configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Check that the configuration describes a playable grid
    pub fn validate(&self) -> Result<(), GameError> {
        if self.frames_per_second == 0 {
            return Err(GameError::InvalidConfig(
                "frames_per_second must be at least 1".to_string(),
            ));
        }

        for (name, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ] {
            if value < 2 * CELL_SIZE {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be at least {}, got {value}",
                    2 * CELL_SIZE
                )));
            }
            if value % CELL_SIZE != 0 {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be a multiple of {CELL_SIZE}, got {value}"
                )));
            }
        }

        if self.win_score == 0 {
            return Err(GameError::InvalidConfig(
                "win_score must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
