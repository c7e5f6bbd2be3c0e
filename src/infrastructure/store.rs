//! File-backed content store
//!
//! Each record lives in its own `*.json` document under the configured
//! store directory. The store is the normalization and ordering boundary:
//! it hands the curation layer a pool that is already sorted newest-first,
//! with per-record defaults applied during deserialization.

use crate::domain::ContentRecord;
use crate::error::{Result, VitrineError};
use crate::infrastructure::Config;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract store for content operations
pub trait ContentStore {
    /// Get the root directory of this store
    fn root(&self) -> &Path;

    /// Load configuration from .vitrine/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .vitrine/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .vitrine directory exists
    fn is_initialized(&self) -> bool;

    /// Create .vitrine directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ContentStore
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the store root by walking up from the current directory.
    /// First checks the VITRINE_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("VITRINE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_vitrine_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(VitrineError::Config(format!(
                    "VITRINE_ROOT is set to '{}' but no .vitrine directory found. \
                    Run 'vitrine init' in that directory or unset VITRINE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_vitrine_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(VitrineError::NotVitrineDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_vitrine_dir(path: &Path) -> bool {
        path.join(".vitrine").is_dir()
    }
}

impl ContentStore for FileStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_vitrine_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let vitrine_dir = self.root.join(".vitrine");

        if vitrine_dir.exists() {
            return Err(VitrineError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&vitrine_dir)?;
        Ok(())
    }
}

// Record operations (not part of trait - filesystem-specific)
impl FileStore {
    /// Load the full record pool, sorted descending by publication time.
    ///
    /// Undated records sort after dated ones; ties break by id so the
    /// ordering, and therefore curation, is deterministic. A file that is
    /// not valid JSON fails the whole load rather than producing a
    /// partial pool.
    pub fn load_pool(&self, store_dir: &str) -> Result<Vec<ContentRecord>> {
        let dir = self.root.join(store_dir);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut pool = Vec::new();

        let walker = WalkDir::new(&dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let contents = fs::read_to_string(path)?;
            let record: ContentRecord =
                serde_json::from_str(&contents).map_err(|source| VitrineError::InvalidRecord {
                    path: path.to_path_buf(),
                    source,
                })?;
            pool.push(record);
        }

        pool.sort_by(|a, b| match (a.published_at, b.published_at) {
            (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.id.cmp(&b.id)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        });

        Ok(pool)
    }

    /// Load a single record by id
    pub fn load_record(&self, store_dir: &str, id: &str) -> Result<ContentRecord> {
        let pool = self.load_pool(store_dir)?;
        pool.into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| VitrineError::RecordNotFound(id.to_string()))
    }

    /// Write a record as a JSON document named after its id
    pub fn write_record(&self, store_dir: &str, record: &ContentRecord) -> Result<()> {
        let dir = self.root.join(store_dir);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let contents = serde_json::to_string_pretty(record)
            .map_err(|e| VitrineError::Config(format!("Failed to serialize record: {}", e)))?;
        fs::write(dir.join(format!("{}.json", record.id)), contents)?;
        Ok(())
    }
}
