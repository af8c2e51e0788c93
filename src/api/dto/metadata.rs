//! DTOs for the metadata fetch endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::PageMetadata;

/// Request to extract preview metadata from a page.
#[derive(Debug, Deserialize, Validate)]
pub struct FetchMetadataRequest {
    #[validate(url(message = "Invalid URL"))]
    pub url: String,
}

/// Extracted preview metadata.
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl From<PageMetadata> for MetadataResponse {
    fn from(meta: PageMetadata) -> Self {
        Self {
            title: meta.title,
            description: meta.description,
            image: meta.image,
        }
    }
}
