//! Handlers for administrative link CRUD.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::api::dto::links::{DeleteLinkResponse, LinkListItem, ListLinksQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Shoes",                              // optional
///   "description": "Fresh kicks",                  // optional
///   "image_url": "https://cdn.example/a.jpg",      // optional
///   "source_url": "https://news.example/article",  // optional
///   "destination_url": "https://shop.example/p/1"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the destination URL is missing or invalid.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    payload.validate()?;

    let record = state.link_service.create_link(payload.into()).await?;
    let short_url = state
        .link_service
        .short_url(&state.public_base_url, &record.code);

    Ok(Json(CreateLinkResponse {
        code: record.code,
        short_url,
    }))
}

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?limit=N` (default and maximum 100)
///
/// This is where click analytics are read; the resolution path only writes.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<Vec<LinkListItem>>, AppError> {
    let records = state
        .link_service
        .list_links(query.effective_limit())
        .await?;

    Ok(Json(records.into_iter().map(LinkListItem::from).collect()))
}

/// Deletes a link. Subsequent resolutions of the code answer 404.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found when the code does not exist.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    let deleted = state.link_service.delete_link(&code).await?;
    if !deleted {
        return Err(AppError::not_found(
            "Shortlink not found",
            json!({ "code": code }),
        ));
    }

    Ok(Json(DeleteLinkResponse { deleted }))
}
