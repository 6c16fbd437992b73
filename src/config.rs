use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Checks that a horizontal snake of `snake_size` cells can be spawned.
    pub fn check_snake_fits(self, snake_size: u16) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if snake_size == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if snake_size >= self.width {
            return Err(ConfigError::SnakeTooLong {
                snake_size,
                width: self.width,
            });
        }
        Ok(())
    }
}

/// Default grid width used by the environment.
pub const DEFAULT_GRID_WIDTH: u16 = 10;

/// Default grid height used by the environment.
pub const DEFAULT_GRID_HEIGHT: u16 = 10;

/// Default initial snake length.
pub const DEFAULT_SNAKE_SIZE: u16 = 5;

/// Reward for a step that eats an apple.
pub const APPLE_REWARD: i32 = 1;

/// Reward for a step that ends the episode.
pub const COLLISION_REWARD: i32 = -100;

/// Frame interval for paced rendering (30 fps).
pub const FRAME_INTERVAL_MS: u64 = 1000 / 30;

/// Snake tick interval used by keyboard play.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Step cap for headless rollouts.
pub const DEFAULT_MAX_EPISODE_STEPS: u64 = 1_000;

/// Errors raised while building or loading an environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },

    #[error("snake must have at least one segment")]
    EmptySnake,

    #[error("snake of size {snake_size} does not fit a grid of width {width}")]
    SnakeTooLong { snake_size: u16, width: u16 },

    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),
}

/// Environment configuration. Every field is optional in the JSON form.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub width: u16,
    pub height: u16,
    pub snake_size: u16,
    /// Seed for the environment's random source; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            snake_size: DEFAULT_SNAKE_SIZE,
            seed: None,
        }
    }
}

impl EnvConfig {
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Rejects configurations the game cannot be spawned from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid().check_snake_fits(self.snake_size)
    }

    /// Loads and validates a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, EnvConfig, GridSize};

    #[test]
    fn default_config_is_valid() {
        let config = EnvConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.grid().total_cells(), 100);
    }

    #[test]
    fn snake_as_wide_as_grid_is_rejected() {
        let grid = GridSize {
            width: 5,
            height: 5,
        };

        assert!(matches!(
            grid.check_snake_fits(5),
            Err(ConfigError::SnakeTooLong {
                snake_size: 5,
                width: 5
            })
        ));
        assert!(grid.check_snake_fits(4).is_ok());
    }

    #[test]
    fn empty_snake_and_grid_are_rejected() {
        let grid = GridSize {
            width: 0,
            height: 4,
        };
        assert!(matches!(
            grid.check_snake_fits(1),
            Err(ConfigError::EmptyGrid { .. })
        ));

        let grid = GridSize {
            width: 4,
            height: 4,
        };
        assert!(matches!(
            grid.check_snake_fits(0),
            Err(ConfigError::EmptySnake)
        ));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = EnvConfig::from_json(r#"{"width": 20, "seed": 7}"#)
            .expect("partial config should parse");

        assert_eq!(config.width, 20);
        assert_eq!(config.height, 10);
        assert_eq!(config.snake_size, 5);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn json_with_oversized_snake_is_rejected() {
        let result = EnvConfig::from_json(r#"{"width": 4, "snake_size": 4}"#);

        assert!(matches!(result, Err(ConfigError::SnakeTooLong { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            EnvConfig::from_json("not-json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
