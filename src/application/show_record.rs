//! Show a single record use case

use crate::domain::ContentRecord;
use crate::error::Result;
use crate::infrastructure::{Config, ContentStore, FileStore};

/// Load a single record by id.
pub fn show_record(store: &FileStore, id: &str) -> Result<(ContentRecord, Config)> {
    let config = store.load_config()?;
    let record = store.load_record(&config.store_dir, id)?;
    Ok((record, config))
}
