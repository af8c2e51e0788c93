//! Preview metadata extracted from a remote page.

use serde::{Deserialize, Serialize};

/// Open Graph style preview metadata for a page.
///
/// Produced by the metadata fetcher at link-creation time; never consulted
/// on the resolution path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub image: String,
}
