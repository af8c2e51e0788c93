//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /s/{code}` - Short link resolution (the hot path)
//! - `GET /health`   - Health check
//! - `/api/*`        - Administrative REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, for creation tooling hosted elsewhere
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, resolve_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/s/{code}", get(resolve_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
