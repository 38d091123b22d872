use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

const CONFIG_FILE_NAME: &str = "config.json";

/// Top-level configuration stored on disk.
///
/// Example JSON:
/// {
///   "default_location": "London"
/// }
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<String>,
}

impl Config {
    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        serde_json::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| ConfigError::Write { path: parent.to_path_buf(), source })?;
        }

        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json)
            .map_err(|source| ConfigError::Write { path: path.to_path_buf(), source })
    }

    /// Default path of the config file in the platform config directory.
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn set_default_location(&mut self, location: impl Into<String>) {
        self.default_location = Some(location.into());
    }

    /// Location to query: the explicit one if non-empty, else the configured default.
    pub fn effective_location(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        non_empty(explicit)
            .or_else(|| non_empty(self.default_location.as_deref()))
            .map(str::to_owned)
            .ok_or(ConfigError::MissingLocation)
    }
}

/// Validate an API key obtained from a flag or [`API_KEY_ENV`].
pub fn require_api_key(key: Option<&str>) -> Result<String, ConfigError> {
    non_empty(key).map(str::to_owned).ok_or(ConfigError::MissingApiKey)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
