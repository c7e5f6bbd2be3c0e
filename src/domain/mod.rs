//! Domain layer - Business logic and domain models

pub mod curator;
pub mod record;
pub mod tags;

pub use curator::{curate, Curation, FEATURED_LIMIT, FEATURED_TAG, LATEST_LIMIT, LATEST_TAG};
pub use record::ContentRecord;
