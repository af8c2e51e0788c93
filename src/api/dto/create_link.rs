//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::NewLink;

/// Request to create a short link.
///
/// Preview fields are optional and default to empty strings; only the
/// destination is required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub source_url: String,

    /// The eventual redirect target (must be a valid HTTP/HTTPS URL).
    #[validate(url(message = "Invalid destination URL"))]
    pub destination_url: String,
}

impl From<CreateLinkRequest> for NewLink {
    fn from(req: CreateLinkRequest) -> Self {
        NewLink {
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            source_url: req.source_url,
            destination_url: req.destination_url,
        }
    }
}

/// Response for a created link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub code: String,
    pub short_url: String,
}
