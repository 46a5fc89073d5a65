//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tictactoe_core::DEFAULT_STATS_FILE;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a session. Every field is optional; missing values are
/// prompted for or defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score store location.
    stats_file: Option<PathBuf>,

    /// Name of the player with marker X.
    player_x: Option<String>,

    /// Name of the player with marker O.
    player_o: Option<String>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
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

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line values on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        stats_file: Option<PathBuf>,
        player_x: Option<String>,
        player_o: Option<String>,
    ) -> Self {
        if stats_file.is_some() {
            self.stats_file = stats_file;
        }
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if player_o.is_some() {
            self.player_o = player_o;
        }
        self
    }

    /// Configured store location, or [`DEFAULT_STATS_FILE`].
    #[instrument(skip(self))]
    pub fn stats_file_or_default(&self) -> PathBuf {
        self.stats_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_FILE))
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
