//! Content record model
//!
//! Records are stored as JSON documents with camelCase keys. Deserialization
//! is lenient: a missing or wrong-typed `tags`, `likedBy`, or `publishedAt`
//! field normalizes to its default instead of failing the whole pool, so the
//! curation layer never has to validate anything. Normalization happens here
//! and nowhere else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// A single content record, identified by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub author: String,

    /// Publication timestamp; `None` when absent or unparseable
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient_string_set")]
    pub tags: BTreeSet<String>,

    /// Identifiers of users who liked this record; carried through, not
    /// consumed by curation
    #[serde(default, deserialize_with = "lenient_string_set")]
    pub liked_by: BTreeSet<String>,
}

impl ContentRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Accept an array of strings; anything else (including non-string elements)
/// collapses to the empty set
fn lenient_string_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(BTreeSet::new()),
    }
}

/// Accept an RFC 3339 string; anything else becomes `None`
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))),
        _ => Ok(None),
    }
}
