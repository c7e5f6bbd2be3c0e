//! Front-page feed use case

use crate::domain::{curate, Curation};
use crate::error::Result;
use crate::infrastructure::{Config, ContentStore, FileStore};

/// Load the record pool and curate it into the front-page groups.
///
/// Returns the config alongside the curation so the caller can apply the
/// configured date format when rendering.
pub fn build_feed(store: &FileStore) -> Result<(Curation, Config)> {
    let config = store.load_config()?;
    let pool = store.load_pool(&config.store_dir)?;
    Ok((curate(&pool), config))
}
