//! Handler for short link resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use crate::state::AppState;

/// Resolves a short code into one of two mutually exclusive documents.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Request Flow
///
/// 1. Extract the code from the path and the User-Agent header
/// 2. `record_hit` on the store: unknown code => 404 plain text; known code
///    => click counter incremented atomically and the record carried forward
/// 3. Classify the requester from the User-Agent
/// 4. Render the preview document (crawler) or the interactive redirect
///    document (client) and answer 200 with HTML
///
/// The click is counted before classification, so crawler fetches count too.
/// The counter is not surfaced here; it feeds the administrative listing.
///
/// # Errors
///
/// Unknown codes answer 404 plain text. Store or rendering failures are
/// logged and answered as 500 plain text; they never propagate as a crash.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let link = match state.link_store.record_hit(&code).await {
        Ok(Some(link)) => link,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, "Shortlink not found").into_response();
        }
        Err(e) => {
            error!("Store error resolving {code}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing shortlink",
            )
                .into_response();
        }
    };

    let requester = state.classifier.classify(user_agent);
    debug!(
        "[{code}] {requester:?} ua={}",
        user_agent.chars().take(50).collect::<String>()
    );

    match state
        .renderer
        .render(&link, requester, &state.public_base_url)
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Render error for {code}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing shortlink",
            )
                .into_response()
        }
    }
}
