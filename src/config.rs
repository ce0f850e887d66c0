//! Presentation settings for a series.
//!
//! Everything here has a default, so a run without a config file or flags
//! behaves exactly like the plain game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings that shape how a series is presented.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// Style output by tone.
    color: bool,

    /// Clear the screen before redrawing the board.
    clear_screen: bool,

    /// How long an occupied-square message stays up before the redraw.
    conflict_pause_ms: u64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            conflict_pause_ms: 1500,
        }
    }
}

impl SeriesConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Pause after a move onto an occupied square.
    pub fn conflict_pause(&self) -> Duration {
        Duration::from_millis(self.conflict_pause_ms)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
