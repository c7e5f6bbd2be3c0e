//! List records use case

use crate::domain::ContentRecord;
use crate::error::Result;
use crate::infrastructure::{ContentStore, FileStore};

/// List records newest-first with an optional tag filter and limit.
pub fn list_records(
    store: &FileStore,
    tag: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<ContentRecord>> {
    let config = store.load_config()?;
    let mut pool = store.load_pool(&config.store_dir)?;

    if let Some(tag) = tag {
        pool.retain(|record| record.has_tag(tag));
    }

    if let Some(n) = limit {
        pool.truncate(n);
    }

    Ok(pool)
}
