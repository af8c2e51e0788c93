//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RenderService};
use crate::domain::classifier::RequesterClassifier;
use crate::domain::repositories::{LinkStore, MetadataFetcher};

/// Application state shared across requests.
///
/// The link store is the only shared mutable resource; everything else is
/// immutable configuration or stateless services.
#[derive(Clone)]
pub struct AppState {
    pub link_store: Arc<dyn LinkStore>,
    pub link_service: Arc<LinkService>,
    pub metadata_fetcher: Arc<dyn MetadataFetcher>,
    pub classifier: Arc<RequesterClassifier>,
    pub renderer: Arc<RenderService>,
    /// Public base URL of this service, used for canonical short URLs.
    pub public_base_url: String,
}

impl AppState {
    pub fn new(
        link_store: Arc<dyn LinkStore>,
        metadata_fetcher: Arc<dyn MetadataFetcher>,
        classifier: Arc<RequesterClassifier>,
        renderer: Arc<RenderService>,
        public_base_url: String,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(link_store.clone()));
        Self {
            link_store,
            link_service,
            metadata_fetcher,
            classifier,
            renderer,
            public_base_url,
        }
    }
}
