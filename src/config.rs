//! Game configuration loaded from TOML.

use crate::games::tictactoe::{AnyRandom, Game, Symbols};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game: marks and optional seed for the computer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol written for user moves.
    #[serde(default = "default_user_symbol")]
    user_symbol: String,

    /// Symbol written for computer moves.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: String,

    /// Seed for reproducible computer moves. Unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_user_symbol() -> String {
    "x".to_string()
}

#[instrument]
fn default_computer_symbol() -> String {
    "o".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            user_symbol: default_user_symbol(),
            computer_symbol: default_computer_symbol(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration with the given symbols and seed.
    #[instrument]
    pub fn new(user_symbol: String, computer_symbol: String, seed: Option<u64>) -> Self {
        Self {
            user_symbol,
            computer_symbol,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with the seed replaced.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that both symbols are non-empty and distinct.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_symbol.is_empty() || self.computer_symbol.is_empty() {
            return Err(ConfigError::new("Symbols must not be empty".to_string()));
        }
        if self.user_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "User and computer share symbol {:?}",
                self.user_symbol
            )));
        }
        Ok(())
    }

    /// Board symbols described by this configuration.
    pub fn symbols(&self) -> Symbols {
        Symbols {
            user: self.user_symbol.clone(),
            computer: self.computer_symbol.clone(),
        }
    }

    /// Creates a game using these symbols, seeded if a seed is set.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn build_game(&self) -> Game<AnyRandom> {
        Game::with_symbols(self.symbols(), AnyRandom::from_seed(self.seed))
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
