//! Front-page curation
//!
//! Splits a record pool (already sorted newest-first) into two disjoint,
//! size-bounded display groups. The routing tags `featured` and `latest`
//! take priority; when absent, selection falls back to pool position.
//! Implemented as three pure stages (partition, primary selection,
//! backfill) composed by [`curate`], so each policy can be tested on its
//! own. The curator never re-sorts and never fails: it only filters and
//! truncates.

use crate::domain::ContentRecord;
use std::collections::HashSet;

/// Maximum size of the featured group
pub const FEATURED_LIMIT: usize = 3;

/// Maximum size of the latest group
pub const LATEST_LIMIT: usize = 4;

/// Routing tag marking a record as editorially featured
pub const FEATURED_TAG: &str = "featured";

/// Routing tag pinning a record into the latest group
pub const LATEST_TAG: &str = "latest";

/// The two display groups produced by [`curate`]; disjoint by record id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curation {
    pub featured: Vec<ContentRecord>,
    pub latest: Vec<ContentRecord>,
}

/// Curate a pool into the featured and latest groups.
///
/// The pool must already be ordered newest-first; relative order is
/// preserved in both outputs. The exclusion direction is one-way: the
/// latest group avoids ids already featured, never the other way around.
pub fn curate(pool: &[ContentRecord]) -> Curation {
    let tagged_featured = partition_by_tag(pool, FEATURED_TAG);
    let tagged_latest = partition_by_tag(pool, LATEST_TAG);

    let featured = select_featured(pool, &tagged_featured);
    let mut latest = select_latest_primary(pool, &tagged_latest, &featured);
    backfill_latest(pool, &featured, &mut latest);

    Curation { featured, latest }
}

/// Records carrying the given tag, in pool order
fn partition_by_tag<'a>(pool: &'a [ContentRecord], tag: &str) -> Vec<&'a ContentRecord> {
    pool.iter().filter(|record| record.has_tag(tag)).collect()
}

/// First stage: the featured group.
///
/// Tagged records win; with none tagged, the newest records stand in.
/// There is no backfill for this group, so a single tagged record yields
/// a group of one.
fn select_featured(pool: &[ContentRecord], tagged: &[&ContentRecord]) -> Vec<ContentRecord> {
    let source: Box<dyn Iterator<Item = &ContentRecord> + '_> = if tagged.is_empty() {
        Box::new(pool.iter())
    } else {
        Box::new(tagged.iter().copied())
    };
    source.take(FEATURED_LIMIT).cloned().collect()
}

/// Second stage: the latest group before backfill.
///
/// A non-empty tagged partition is used even when it cannot fill the
/// group; sufficiency is only restored later by [`backfill_latest`],
/// which draws by pool position rather than by tag.
fn select_latest_primary(
    pool: &[ContentRecord],
    tagged: &[&ContentRecord],
    featured: &[ContentRecord],
) -> Vec<ContentRecord> {
    let featured_ids = id_set(featured);
    let source: Box<dyn Iterator<Item = &ContentRecord> + '_> = if tagged.is_empty() {
        Box::new(pool.iter())
    } else {
        Box::new(tagged.iter().copied())
    };
    source
        .filter(|record| !featured_ids.contains(record.id.as_str()))
        .take(LATEST_LIMIT)
        .cloned()
        .collect()
}

/// Final stage: top the latest group back up to its limit from the pool,
/// skipping anything already shown in either group
fn backfill_latest(
    pool: &[ContentRecord],
    featured: &[ContentRecord],
    latest: &mut Vec<ContentRecord>,
) {
    if latest.len() >= LATEST_LIMIT {
        return;
    }

    let featured_ids = id_set(featured);
    // Owned ids: `latest` grows while this set is consulted
    let mut shown: HashSet<String> = latest.iter().map(|record| record.id.clone()).collect();

    for record in pool {
        if latest.len() >= LATEST_LIMIT {
            break;
        }
        if featured_ids.contains(record.id.as_str()) || shown.contains(&record.id) {
            continue;
        }
        shown.insert(record.id.clone());
        latest.push(record.clone());
    }
}

fn id_set(records: &[ContentRecord]) -> HashSet<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, tags: &[&str]) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            title: format!("Title {}", id),
            description: String::new(),
            image_url: String::new(),
            body: String::new(),
            author: String::new(),
            published_at: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            liked_by: Default::default(),
        }
    }

    fn untagged_pool(ids: &[&str]) -> Vec<ContentRecord> {
        ids.iter().map(|id| record(id, &[])).collect()
    }

    fn ids(records: &[ContentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_pool_yields_empty_groups() {
        let curation = curate(&[]);
        assert!(curation.featured.is_empty());
        assert!(curation.latest.is_empty());
    }

    #[test]
    fn test_untagged_pool_of_ten() {
        let pool = untagged_pool(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let curation = curate(&pool);

        assert_eq!(ids(&curation.featured), vec!["a", "b", "c"]);
        assert_eq!(ids(&curation.latest), vec!["d", "e", "f", "g"]);
    }

    #[test]
    fn test_untagged_pool_of_five_exhausts() {
        let pool = untagged_pool(&["a", "b", "c", "d", "e"]);
        let curation = curate(&pool);

        assert_eq!(ids(&curation.featured), vec!["a", "b", "c"]);
        // Only two records remain; backfill cannot exceed the pool
        assert_eq!(ids(&curation.latest), vec!["d", "e"]);
    }

    #[test]
    fn test_featured_tag_overrides_recency() {
        let mut pool = untagged_pool(&["a", "b", "c", "d", "e", "f"]);
        pool.insert(3, record("f1", &["featured"]));
        let curation = curate(&pool);

        // Single tagged record; featured has no backfill, size stays 1
        assert_eq!(ids(&curation.featured), vec!["f1"]);
        assert_eq!(ids(&curation.latest), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_featured_tag_truncates_to_limit() {
        let pool: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| record(id, &["featured"]))
            .collect();
        let curation = curate(&pool);

        assert_eq!(ids(&curation.featured), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_latest_tag_overrides_position() {
        let mut pool = untagged_pool(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        pool[6].tags.insert("latest".to_string());
        pool[7].tags.insert("latest".to_string());
        let curation = curate(&pool);

        assert_eq!(ids(&curation.featured), vec!["a", "b", "c"]);
        // Tagged partition is short (2), backfill tops up by position,
        // skipping the featured ids and what is already shown
        assert_eq!(ids(&curation.latest), vec!["g", "h", "d", "e"]);
    }

    #[test]
    fn test_record_tagged_both_never_appears_twice() {
        let mut pool = untagged_pool(&["a", "b", "c", "d", "e", "f"]);
        pool[0].tags.insert("featured".to_string());
        pool[0].tags.insert("latest".to_string());
        let curation = curate(&pool);

        assert_eq!(ids(&curation.featured), vec!["a"]);
        // "a" is featured, so the latest group skips it and backfills
        assert_eq!(ids(&curation.latest), vec!["b", "c", "d", "e"]);
    }

    #[test]
    fn test_groups_are_always_disjoint() {
        let mut pool = untagged_pool(&["a", "b", "c", "d", "e", "f", "g"]);
        pool[1].tags.insert("featured".to_string());
        pool[1].tags.insert("latest".to_string());
        pool[4].tags.insert("latest".to_string());
        let curation = curate(&pool);

        let featured_ids: std::collections::HashSet<_> =
            curation.featured.iter().map(|r| r.id.as_str()).collect();
        assert!(curation
            .latest
            .iter()
            .all(|r| !featured_ids.contains(r.id.as_str())));
    }

    #[test]
    fn test_size_bounds_hold() {
        let pool = untagged_pool(&[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
        ]);
        let curation = curate(&pool);

        assert!(curation.featured.len() <= FEATURED_LIMIT);
        assert!(curation.latest.len() <= LATEST_LIMIT);
    }

    #[test]
    fn test_backfill_reaches_cap_with_enough_records() {
        let pool = untagged_pool(&["a", "b", "c", "d", "e", "f", "g"]);
        let curation = curate(&pool);

        assert_eq!(curation.latest.len(), LATEST_LIMIT);
    }

    #[test]
    fn test_featured_ignores_latest_availability() {
        // Featured never gives up records to help latest fill up
        let pool = untagged_pool(&["a", "b", "c", "d"]);
        let curation = curate(&pool);

        assert_eq!(ids(&curation.featured), vec!["a", "b", "c"]);
        assert_eq!(ids(&curation.latest), vec!["d"]);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let mut pool = untagged_pool(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        pool[2].tags.insert("featured".to_string());
        pool[5].tags.insert("featured".to_string());
        let curation = curate(&pool);

        assert_eq!(ids(&curation.featured), vec!["c", "f"]);
    }

    #[test]
    fn test_curate_is_pure() {
        let mut pool = untagged_pool(&["a", "b", "c", "d", "e", "f"]);
        pool[1].tags.insert("featured".to_string());

        let first = curate(&pool);
        let second = curate(&pool);
        assert_eq!(first, second);
    }

    #[test]
    fn test_partition_preserves_order() {
        let mut pool = untagged_pool(&["a", "b", "c", "d"]);
        pool[0].tags.insert("featured".to_string());
        pool[3].tags.insert("featured".to_string());

        let tagged = partition_by_tag(&pool, FEATURED_TAG);
        let tagged_ids: Vec<_> = tagged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(tagged_ids, vec!["a", "d"]);
    }

    #[test]
    fn test_primary_selection_keeps_short_tagged_path() {
        let mut pool = untagged_pool(&["a", "b", "c", "d", "e", "f"]);
        pool[5].tags.insert("latest".to_string());
        let tagged = partition_by_tag(&pool, LATEST_TAG);
        let featured = select_featured(&pool, &[]);

        let latest = select_latest_primary(&pool, &tagged, &featured);
        // The tagged path is used as-is, even at size 1
        assert_eq!(ids(&latest), vec!["f"]);
    }

    #[test]
    fn test_backfill_skips_both_groups() {
        let pool = untagged_pool(&["a", "b", "c", "d", "e", "f", "g"]);
        let featured = vec![pool[0].clone(), pool[1].clone()];
        let mut latest = vec![pool[4].clone()];

        backfill_latest(&pool, &featured, &mut latest);
        assert_eq!(ids(&latest), vec!["e", "c", "d", "f"]);
    }

    #[test]
    fn test_backfill_noop_when_full() {
        let pool = untagged_pool(&["a", "b", "c", "d", "e", "f"]);
        let featured = vec![];
        let mut latest: Vec<_> = pool[..4].to_vec();

        backfill_latest(&pool, &featured, &mut latest);
        assert_eq!(ids(&latest), vec!["a", "b", "c", "d"]);
    }
}
