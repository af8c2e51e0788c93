#![allow(dead_code)]
//! Shared fixtures for integration tests.

use std::sync::Arc;

use async_trait::async_trait;

use linkpeek::application::services::RenderService;
use linkpeek::infrastructure::persistence::MemoryLinkStore;
use linkpeek::prelude::*;

/// Link store whose every operation fails, for error-path tests.
pub struct FailingLinkStore;

impl FailingLinkStore {
    fn offline() -> AppError {
        AppError::internal("store offline", serde_json::json!({}))
    }
}

#[async_trait]
impl LinkStore for FailingLinkStore {
    async fn get(&self, _code: &str) -> Result<Option<LinkRecord>, AppError> {
        Err(Self::offline())
    }
    async fn record_hit(&self, _code: &str) -> Result<Option<LinkRecord>, AppError> {
        Err(Self::offline())
    }
    async fn insert(&self, _record: LinkRecord) -> Result<LinkRecord, AppError> {
        Err(Self::offline())
    }
    async fn remove(&self, _code: &str) -> Result<bool, AppError> {
        Err(Self::offline())
    }
    async fn list(&self, _limit: usize) -> Result<Vec<LinkRecord>, AppError> {
        Err(Self::offline())
    }
}

/// Builds an [`AppState`] whose store always fails.
pub fn create_failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingLinkStore),
        Arc::new(StubMetadataFetcher),
        Arc::new(RequesterClassifier::default()),
        Arc::new(RenderService::new(
            "shopapp".to_string(),
            "com.example.shop".to_string(),
            None,
        )),
        "https://go.example".to_string(),
    )
}

/// Metadata fetcher that never touches the network.
pub struct StubMetadataFetcher;

#[async_trait]
impl MetadataFetcher for StubMetadataFetcher {
    async fn fetch(&self, _url: &str) -> Result<PageMetadata, AppError> {
        Ok(PageMetadata {
            title: "Stub title".to_string(),
            description: "Stub description".to_string(),
            image: "https://cdn.example/stub.jpg".to_string(),
        })
    }
}

/// Builds an [`AppState`] over a fresh in-memory store and returns both.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());

    let state = AppState::new(
        store.clone(),
        Arc::new(StubMetadataFetcher),
        Arc::new(RequesterClassifier::default()),
        Arc::new(RenderService::new(
            "shopapp".to_string(),
            "com.example.shop".to_string(),
            None,
        )),
        "https://go.example".to_string(),
    );

    (state, store)
}

/// Inserts a link directly into the store.
pub async fn seed_link(store: &MemoryLinkStore, code: &str, title: &str, destination: &str) {
    store
        .insert(LinkRecord::create(
            code.to_string(),
            NewLink {
                title: title.to_string(),
                destination_url: destination.to_string(),
                ..Default::default()
            },
        ))
        .await
        .expect("seed link");
}
