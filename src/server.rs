//! HTTP server initialization and runtime setup.
//!
//! Selects the store backend, wires services into [`AppState`], and runs the
//! Axum server until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::RenderService;
use crate::config::Config;
use crate::domain::classifier::RequesterClassifier;
use crate::domain::repositories::LinkStore;
use crate::infrastructure::metadata::HttpMetadataFetcher;
use crate::infrastructure::persistence::{JsonFileLinkStore, MemoryLinkStore};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the store file cannot be opened, the listen address
/// cannot be bound, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let link_store: Arc<dyn LinkStore> = match &config.store_path {
        Some(path) => {
            let store = JsonFileLinkStore::open(path).await?;
            tracing::info!("Link store: JSON file at {}", path.display());
            Arc::new(store)
        }
        None => {
            tracing::info!("Link store: in-memory (links are lost on restart)");
            Arc::new(MemoryLinkStore::new())
        }
    };

    let metadata_fetcher = Arc::new(HttpMetadataFetcher::new(Duration::from_secs(
        config.metadata_timeout_secs,
    ))?);

    let classifier = Arc::new(RequesterClassifier::new(&config.extra_crawler_signatures));

    let renderer = Arc::new(RenderService::new(
        config.deep_link_scheme.clone(),
        config.android_package.clone(),
        config.fb_app_id.clone(),
    ));

    let state = AppState::new(
        link_store,
        metadata_fetcher,
        classifier,
        renderer,
        config.public_base_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
