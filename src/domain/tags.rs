//! Topical tag derivation

use crate::domain::curator::{FEATURED_TAG, LATEST_TAG};
use crate::domain::ContentRecord;
use std::collections::BTreeSet;

/// Collect the distinct topical tags across a pool, sorted.
///
/// The routing tags `featured` and `latest` are selection signals, not
/// topics, and never surface here.
pub fn topical_tags(pool: &[ContentRecord]) -> Vec<String> {
    let mut tags: BTreeSet<&str> = BTreeSet::new();

    for record in pool {
        for tag in &record.tags {
            if tag != FEATURED_TAG && tag != LATEST_TAG {
                tags.insert(tag);
            }
        }
    }

    tags.into_iter().map(str::to_string).collect()
}
