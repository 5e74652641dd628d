//! Game configuration
//!
//! Read from a TOML file. Location, in order:
//! - Path given on the command line
//! - `config.toml` in the OS-standard config directory (via `directories`)
//!
//! A missing file in the standard location means defaults.

use crate::game::timer::DEFAULT_TURN_DURATION;
use crate::game::validation::MAX_WORD_LENGTH;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDirectory,
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds per turn
    pub turn_duration_secs: i32,
    /// Longest word accepted into the catalog, in characters
    pub max_word_length: usize,
    /// Write logs here. No logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_duration_secs: DEFAULT_TURN_DURATION,
            max_word_length: MAX_WORD_LENGTH,
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` if given, otherwise from the standard location.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = Self::default_path()?;
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// `config.toml` in the platform config directory
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "fishbowl")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDirectory)
    }
}
