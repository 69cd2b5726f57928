//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_hanoi::{MAX_BLOCKS, MIN_BLOCKS, PEG_COUNT};
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HanoiConfig {
    /// Blocks on the first peg at start (3-10).
    #[serde(default = "default_block_count")]
    block_count: u8,

    /// Display labels for the three pegs.
    #[serde(default = "default_peg_labels")]
    peg_labels: [String; PEG_COUNT],

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_block_count() -> u8 {
    MIN_BLOCKS
}

fn default_peg_labels() -> [String; PEG_COUNT] {
    ["A", "B", "C"].map(String::from)
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            block_count: default_block_count(),
            peg_labels: default_peg_labels(),
            log_filter: default_log_filter(),
        }
    }
}

impl HanoiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(block_count = config.block_count, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the block count, e.g. from a command-line flag.
    #[instrument(skip(self))]
    pub fn with_block_count(mut self, block_count: u8) -> Result<Self, ConfigError> {
        self.block_count = block_count;
        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges and label sanity.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BLOCKS..=MAX_BLOCKS).contains(&self.block_count) {
            return Err(ConfigError::new(format!(
                "block_count must be between {} and {}, got {}",
                MIN_BLOCKS, MAX_BLOCKS, self.block_count
            )));
        }
        if self.peg_labels.iter().any(|label| label.trim().is_empty()) {
            return Err(ConfigError::new("peg_labels must not be blank".to_string()));
        }
        let [a, b, c] = &self.peg_labels;
        if a.eq_ignore_ascii_case(b) || a.eq_ignore_ascii_case(c) || b.eq_ignore_ascii_case(c) {
            return Err(ConfigError::new(
                "peg_labels must be distinct".to_string(),
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
