//! Error types for vitrine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the vitrine application
#[derive(Debug, Error)]
pub enum VitrineError {
    #[error("Not a vitrine directory: {0}")]
    NotVitrineDirectory(PathBuf),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid record file {path}: {source}")]
    InvalidRecord {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VitrineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VitrineError::NotVitrineDirectory(_) => 2,
            VitrineError::RecordNotFound(_) => 3,
            VitrineError::InvalidRecord { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            VitrineError::NotVitrineDirectory(path) => {
                format!(
                    "Not a vitrine directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'vitrine init' in this directory to create a new store\n\
                    • Navigate to an existing vitrine directory\n\
                    • Set VITRINE_ROOT environment variable to your store path",
                    path.display()
                )
            }
            VitrineError::RecordNotFound(id) => {
                format!(
                    "Record not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'vitrine list' to see available records and their ids\n\
                    • Check the id spelling (ids are case-sensitive)",
                    id
                )
            }
            VitrineError::InvalidRecord { path, source } => {
                format!(
                    "Invalid record file {}: {}\n\n\
                    Suggestions:\n\
                    • Each record must be a JSON object with at least an \"id\" field\n\
                    • Check the file for syntax errors (trailing commas, unquoted keys)",
                    path.display(),
                    source
                )
            }
            VitrineError::Config(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Result type using VitrineError
pub type Result<T> = std::result::Result<T, VitrineError>;
