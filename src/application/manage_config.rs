//! Config management use case

use crate::error::{Result, VitrineError};
use crate::infrastructure::{Config, ContentStore, FileStore};

/// Service for managing store configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "store_dir" => Ok(config.store_dir.clone()),
            "date_format" => Ok(config.date_format.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(VitrineError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: store_dir, date_format, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "store_dir" => {
                if value.is_empty() {
                    return Err(VitrineError::Config(
                        "store_dir cannot be empty".to_string(),
                    ));
                }
                config.store_dir = value.to_string();
            }
            "date_format" => {
                config.date_format = value.to_string();
            }
            "created" => {
                return Err(VitrineError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(VitrineError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: store_dir, date_format",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
