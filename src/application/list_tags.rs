//! List topical tags use case

use crate::domain::tags::topical_tags;
use crate::error::Result;
use crate::infrastructure::{ContentStore, FileStore};

/// List the distinct topical tags across the pool, sorted.
pub fn list_tags(store: &FileStore) -> Result<Vec<String>> {
    let config = store.load_config()?;
    let pool = store.load_pool(&config.store_dir)?;
    Ok(topical_tags(&pool))
}
