//! In-memory link store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use serde_json::json;

/// Default [`LinkStore`] backend: a map guarded by an async `RwLock`.
///
/// Lookups take the shared lock and run concurrently; `record_hit` takes the
/// exclusive lock, so the increment-and-read is a single critical section and
/// concurrent hits on the same code can never lose updates. A single coarse
/// lock is enough at expected request volumes.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, LinkRecord>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, code: &str) -> Result<Option<LinkRecord>, AppError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn record_hit(&self, code: &str) -> Result<Option<LinkRecord>, AppError> {
        let mut links = self.links.write().await;
        Ok(links.get_mut(code).map(|record| {
            record.click_count += 1;
            record.clone()
        }))
    }

    async fn insert(&self, record: LinkRecord) -> Result<LinkRecord, AppError> {
        let mut links = self.links.write().await;
        if links.contains_key(&record.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": record.code }),
            ));
        }
        links.insert(record.code.clone(), record.clone());
        Ok(record)
    }

    async fn remove(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.write().await.remove(code).is_some())
    }

    async fn list(&self, limit: usize) -> Result<Vec<LinkRecord>, AppError> {
        let links = self.links.read().await;
        let mut records: Vec<LinkRecord> = links.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}
