//! Configuration management

use crate::error::{Result, VitrineError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default directory (relative to the root) holding record files
pub const DEFAULT_STORE_DIR: &str = "posts";

/// Default chrono format string for displayed dates
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store_dir: String,
    pub date_format: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            store_dir: DEFAULT_STORE_DIR.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .vitrine/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".vitrine").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VitrineError::NotVitrineDirectory(path.to_path_buf())
            } else {
                VitrineError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| VitrineError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .vitrine/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let vitrine_dir = path.join(".vitrine");
        let config_path = vitrine_dir.join("config.toml");

        if !vitrine_dir.exists() {
            fs::create_dir(&vitrine_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
