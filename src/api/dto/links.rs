//! DTOs for link listing and deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::LinkRecord;

/// Default and maximum number of links returned by the listing endpoint.
pub const MAX_LIST_LIMIT: usize = 100;

/// Query parameters for the listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListLinksQuery {
    pub limit: Option<usize>,
}

impl ListLinksQuery {
    /// Effective limit, capped at [`MAX_LIST_LIMIT`].
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(MAX_LIST_LIMIT).min(MAX_LIST_LIMIT)
    }
}

/// A link record as exposed by the administrative listing.
///
/// This is the analytics read path: `click_count` reflects every successful
/// resolution, including crawler hits.
#[derive(Debug, Serialize)]
pub struct LinkListItem {
    pub code: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub source_url: String,
    pub destination_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}

impl From<LinkRecord> for LinkListItem {
    fn from(record: LinkRecord) -> Self {
        Self {
            code: record.code,
            title: record.title,
            description: record.description,
            image_url: record.image_url,
            source_url: record.source_url,
            destination_url: record.destination_url,
            click_count: record.click_count,
            created_at: record.created_at,
        }
    }
}

/// Response for a deletion request.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub deleted: bool,
}
