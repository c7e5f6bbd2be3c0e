//! Initialize store use case

use crate::error::Result;
use crate::infrastructure::{Config, ContentStore, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new vitrine store at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());

    store.initialize()?;

    let config = Config::new();
    store.save_config(&config)?;

    // Pre-create the record directory so the first feed has somewhere to look
    fs::create_dir_all(path.join(&config.store_dir))?;

    println!("Initialized vitrine store at {}", path.display());
    println!("Record directory: {}", config.store_dir);

    Ok(())
}
