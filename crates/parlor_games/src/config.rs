//! Session configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use parlor_tictactoe::Mark;
use parlor_twentyone::{DEFAULT_STAND_ON, TWENTY_ONE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings shared by both games' sessions.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SessionConfig {
    /// Name shown for the human; asked for at the start of a session when absent.
    #[serde(default)]
    player_name: Option<String>,

    /// The human's tic-tac-toe mark.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Whether the human moves first in the opening round.
    #[serde(default = "default_human_first")]
    human_first: bool,

    /// Points needed to win the match.
    #[serde(default = "default_score_threshold")]
    score_threshold: u32,

    /// Total at which the 21 dealer stops drawing.
    #[serde(default = "default_dealer_stand_on")]
    dealer_stand_on: u32,

    /// RNG seed; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Names the computer opponent picks from.
    #[serde(default = "default_computer_names")]
    computer_names: Vec<String>,
}

#[instrument]
fn default_human_mark() -> Mark {
    Mark::X
}

#[instrument]
fn default_human_first() -> bool {
    true
}

#[instrument]
fn default_score_threshold() -> u32 {
    5
}

#[instrument]
fn default_dealer_stand_on() -> u32 {
    DEFAULT_STAND_ON
}

#[instrument]
fn default_computer_names() -> Vec<String> {
    ["Roger", "Hal", "Homer"].map(String::from).to_vec()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            human_mark: default_human_mark(),
            human_first: default_human_first(),
            score_threshold: default_score_threshold(),
            dealer_stand_on: default_dealer_stand_on(),
            seed: None,
            computer_names: default_computer_names(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;
        config.validate()?;

        info!(player = ?config.player_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks the values a file or CLI override could get wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .player_name
            .as_ref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(ConfigError::new(
                "player_name must not be blank".to_string(),
            ));
        }
        if self.score_threshold == 0 {
            return Err(ConfigError::new(
                "score_threshold must be at least 1".to_string(),
            ));
        }
        if !(2..=TWENTY_ONE).contains(&self.dealer_stand_on) {
            return Err(ConfigError::new(format!(
                "dealer_stand_on must be between 2 and {}, got {}",
                TWENTY_ONE, self.dealer_stand_on
            )));
        }
        if self
            .computer_names
            .iter()
            .all(|name| name.trim().is_empty())
        {
            return Err(ConfigError::new(
                "computer_names needs at least one name".to_string(),
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
