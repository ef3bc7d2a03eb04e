//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_records::{DEFAULT_HISTORY_FILE, DEFAULT_STATS_FILE, RecordStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where records live and how games are set up.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the record files.
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,

    /// Statistics file name, relative to `data_dir`.
    #[serde(default = "default_stats_file")]
    stats_file: String,

    /// History file name, relative to `data_dir`.
    #[serde(default = "default_history_file")]
    history_file: String,

    /// Records shown by `history` when no limit is given. `0` shows all.
    #[serde(default = "default_history_limit")]
    history_limit: i64,

    /// Side length of new boards.
    #[serde(default = "default_board_size")]
    board_size: usize,
}

#[instrument]
fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

#[instrument]
fn default_stats_file() -> String {
    DEFAULT_STATS_FILE.to_string()
}

#[instrument]
fn default_history_file() -> String {
    DEFAULT_HISTORY_FILE.to_string()
}

#[instrument]
fn default_history_limit() -> i64 {
    10
}

#[instrument]
fn default_board_size() -> usize {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            stats_file: default_stats_file(),
            history_file: default_history_file(),
            history_limit: default_history_limit(),
            board_size: default_board_size(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or
    /// sets a board size of zero.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(data_dir = %config.data_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1"));
        }
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Full path of the statistics file.
    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(&self.stats_file)
    }

    /// Full path of the history file.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(&self.history_file)
    }

    /// Builds a record store over the configured paths.
    #[instrument(skip(self))]
    pub fn record_store(&self) -> RecordStore {
        RecordStore::new(self.stats_path(), self.history_path())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
