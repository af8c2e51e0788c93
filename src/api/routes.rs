//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, fetch_metadata_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Administrative API routes.
///
/// # Endpoints
///
/// - `POST   /links`         - Create a short link
/// - `GET    /links`         - List links with click counts (paginated)
/// - `DELETE /links/{code}`  - Delete a link
/// - `POST   /metadata`      - Extract preview metadata from a page
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route("/links/{code}", delete(delete_link_handler))
        .route("/metadata", post(fetch_metadata_handler))
}
