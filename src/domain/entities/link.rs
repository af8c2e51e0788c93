//! Link record entity: a short code mapped to a destination with preview metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short link with its social preview metadata and click counter.
///
/// The `code` is unique and immutable after creation. Preview fields
/// (`title`, `description`, `image_url`) may be empty; `destination_url`
/// is always non-empty for a stored record. `click_count` only increases,
/// and only through the store's `record_hit` on the resolution path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub code: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Where the preview metadata came from, if anywhere. Informational only.
    pub source_url: String,
    pub destination_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Materializes a record from creation input with a zero click counter.
    pub fn create(code: String, new_link: NewLink) -> Self {
        Self {
            code,
            title: new_link.title,
            description: new_link.description,
            image_url: new_link.image_url,
            source_url: new_link.source_url,
            destination_url: new_link.destination_url,
            click_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the record carries a preview image.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

/// Input data for creating a new link.
///
/// All preview fields default to empty strings; only `destination_url`
/// is required (validated at the API boundary and again by the service).
#[derive(Debug, Clone, Default)]
pub struct NewLink {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub source_url: String,
    pub destination_url: String,
}
