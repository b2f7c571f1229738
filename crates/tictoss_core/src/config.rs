//! Session configuration: phase timings and default player names.

use crate::setup::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration, normally read from `tictoss.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TictossConfig {
    /// Delays for the countdown, toss and computer moves.
    timing: TimingConfig,

    /// Names pre-filled on the setup screen.
    players: PlayersConfig,
}

/// Durations of the timed phases, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// First number shown by the countdown.
    countdown_from: u8,

    /// Time each countdown number stays up.
    countdown_step_ms: u64,

    /// Time the coin spends in the air.
    toss_delay_ms: u64,

    /// Time the toss result is shown before the round opens.
    toss_announce_ms: u64,

    /// Pause before the computer moves.
    computer_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            countdown_from: 3,
            countdown_step_ms: 1000,
            toss_delay_ms: 2000,
            toss_announce_ms: 1500,
            computer_delay_ms: 1000,
        }
    }
}

impl TimingConfig {
    /// Time each countdown number stays up.
    pub fn countdown_step(&self) -> Duration {
        Duration::from_millis(self.countdown_step_ms)
    }

    /// Time the coin spends in the air.
    pub fn toss_delay(&self) -> Duration {
        Duration::from_millis(self.toss_delay_ms)
    }

    /// Time the toss result is shown.
    pub fn toss_announce(&self) -> Duration {
        Duration::from_millis(self.toss_announce_ms)
    }

    /// Pause before the computer moves.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Default player names.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// First player's name.
    player_one: String,

    /// Second player's name (two-player mode only).
    player_two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            player_one: DEFAULT_PLAYER_ONE.to_string(),
            player_two: DEFAULT_PLAYER_TWO.to_string(),
        }
    }
}

impl TictossConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TictossConfig::from_toml_str(
            r#"
            [timing]
            computer_delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(*config.timing().computer_delay_ms(), 250);
        assert_eq!(*config.timing().countdown_from(), 3);
        assert_eq!(config.players().player_one(), DEFAULT_PLAYER_ONE);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TictossConfig::from_toml_str("[timing\ncountdown_from = 3").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("Config error"));
    }
}
