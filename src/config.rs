//! Application configuration loaded from TOML.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::SessionConfig;
use tracing::{debug, info, instrument};

/// Settings for a run of the application.
///
/// ```toml
/// think_delay_ms = 500
/// seed = 7
///
/// [game]
/// mode = "single"
/// difficulty = "hard"
/// computer = "O"
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mode, difficulty and the computer's mark.
    game: SessionConfig,

    /// Delay before the computer moves, in milliseconds.
    think_delay_ms: u64,

    /// Fixed seed for reproducible games; random when absent.
    seed: Option<u64>,

    /// Where the terminal UI writes its log.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: SessionConfig::default(),
            think_delay_ms: 500,
            seed: None,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file, or defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            mode = %config.game.mode,
            difficulty = %config.game.difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_play_args(mut self, args: &PlayArgs) -> Self {
        if let Some(mode) = args.mode {
            self.game.mode = mode;
        }
        if let Some(difficulty) = args.difficulty {
            self.game.difficulty = difficulty;
        }
        if let Some(computer) = args.computer {
            self.game.computer = computer;
        }
        if let Some(delay) = args.think_delay_ms {
            self.think_delay_ms = delay;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
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
