//! Series configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::POINTS_TARGET;
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Games a side must win to take the series.
    #[serde(default = "default_points_target")]
    points_target: u32,

    /// Redraw the screen instead of scrolling.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_points_target() -> u32 {
    POINTS_TARGET
}

fn default_clear_screen() -> bool {
    true
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            points_target: default_points_target(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl SeriesConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(points_target: u32, clear_screen: bool) -> Self {
        Self {
            points_target,
            clear_screen,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(points_target = config.points_target, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, points_target: Option<u32>, no_clear: bool) -> Self {
        if let Some(points_target) = points_target {
            self.points_target = points_target;
        }
        if no_clear {
            self.clear_screen = false;
        }
        self
    }

    /// Rejects settings no series can be played with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.points_target == 0 {
            return Err(ConfigError::new(
                "points_target must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
