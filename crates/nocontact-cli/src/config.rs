//! TOML-based application configuration.
//!
//! Stores the fixed UTC offset used for calendar-day normalization and an
//! optional override for the check-in data file location.
//!
//! Configuration is stored at `~/.config/nocontact/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/nocontact/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whole-hour UTC offset defining the local calendar day.
    #[serde(default)]
    pub timezone_offset_hours: i32,
    /// Check-in data file override.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone_offset_hours: 0,
            data_file: None,
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when no file
    /// exists.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Resolved check-in data file path.
    pub fn data_file(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("checkins.json")),
        }
    }
}

/// Returns `~/.config/nocontact[-dev]/` based on NOCONTACT_ENV.
///
/// Set NOCONTACT_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("NOCONTACT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("nocontact-dev")
    } else {
        base_dir.join("nocontact")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
