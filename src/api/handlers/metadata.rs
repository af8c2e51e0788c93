//! Handler for the metadata fetch endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::metadata::{FetchMetadataRequest, MetadataResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Extracts preview metadata from a remote page.
///
/// # Endpoint
///
/// `POST /api/metadata`
///
/// Used by link-creation tooling to prefill title, description, and image.
/// This is the only networked operation in the service, and it never runs
/// on the resolution path.
///
/// # Errors
///
/// Returns 400 Bad Request for unusable URLs, 500 when the page cannot be
/// fetched.
pub async fn fetch_metadata_handler(
    State(state): State<AppState>,
    Json(payload): Json<FetchMetadataRequest>,
) -> Result<Json<MetadataResponse>, AppError> {
    payload.validate()?;

    let metadata = state.metadata_fetcher.fetch(&payload.url).await?;

    Ok(Json(MetadataResponse::from(metadata)))
}
