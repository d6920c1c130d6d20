//! Front-end settings, read from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File consulted when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// User-configurable display and logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Show cell numbers on empty cells.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Most recent results shown on the history line. Zero hides it.
    #[serde(default = "default_history_limit")]
    history_limit: usize,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_show_hints() -> bool {
    true
}

#[instrument]
fn default_history_limit() -> usize {
    20
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hints: default_show_hints(),
            history_limit: default_history_limit(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Resolves settings for a run from the working directory.
    ///
    /// See [`Settings::load_in`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."), path)
    }

    /// Resolves settings for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present in `dir`, else the defaults.
    #[instrument(fields(dir = %dir.display()), skip(dir))]
    pub fn load_in(dir: &Path, path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_file = dir.join(DEFAULT_CONFIG_FILE);
                if default_file.is_file() {
                    Self::from_file(default_file)
                } else {
                    debug!("No settings file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Overrides whether cell numbers are shown.
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }
}

/// Settings error.
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
