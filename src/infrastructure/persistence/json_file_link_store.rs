//! JSON-file backed link store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use serde_json::json;

/// [`LinkStore`] backend persisted to a single JSON file.
///
/// The working set lives in the same locked map as [`MemoryLinkStore`]; every
/// mutation rewrites the file while still holding the write lock, so the file
/// always reflects a consistent snapshot and interleaved mutations cannot
/// corrupt it. Suitable for single-instance deployments with modest volumes.
///
/// [`MemoryLinkStore`]: super::MemoryLinkStore
#[derive(Debug)]
pub struct JsonFileLinkStore {
    path: PathBuf,
    links: RwLock<HashMap<String, LinkRecord>>,
}

impl JsonFileLinkStore {
    /// Opens the store at `path`, loading existing records if the file exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the file exists but cannot be read
    /// or parsed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let links = if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            let bytes = tokio::fs::read(&path).await.map_err(|e| {
                AppError::internal(
                    "Failed to read link store file",
                    json!({ "path": path.display().to_string(), "reason": e.to_string() }),
                )
            })?;
            let records: Vec<LinkRecord> = serde_json::from_slice(&bytes).map_err(|e| {
                AppError::internal(
                    "Failed to parse link store file",
                    json!({ "path": path.display().to_string(), "reason": e.to_string() }),
                )
            })?;
            info!("Loaded {} links from {}", records.len(), path.display());
            records.into_iter().map(|r| (r.code.clone(), r)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            links: RwLock::new(links),
        })
    }

    /// Writes the full record set to disk. Caller holds the write lock.
    async fn persist(&self, links: &HashMap<String, LinkRecord>) -> Result<(), AppError> {
        let mut records: Vec<&LinkRecord> = links.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let bytes = serde_json::to_vec_pretty(&records).map_err(|e| {
            AppError::internal(
                "Failed to serialize link store",
                json!({ "reason": e.to_string() }),
            )
        })?;

        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            AppError::internal(
                "Failed to write link store file",
                json!({ "path": self.path.display().to_string(), "reason": e.to_string() }),
            )
        })
    }
}

#[async_trait]
impl LinkStore for JsonFileLinkStore {
    async fn get(&self, code: &str) -> Result<Option<LinkRecord>, AppError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn record_hit(&self, code: &str) -> Result<Option<LinkRecord>, AppError> {
        let mut links = self.links.write().await;
        let updated = match links.get_mut(code) {
            Some(record) => {
                record.click_count += 1;
                record.clone()
            }
            None => return Ok(None),
        };
        self.persist(&links).await?;
        Ok(Some(updated))
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
        self.persist(&links).await?;
        Ok(record)
    }

    async fn remove(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.links.write().await;
        let removed = links.remove(code).is_some();
        if removed {
            self.persist(&links).await?;
        }
        Ok(removed)
    }

    async fn list(&self, limit: usize) -> Result<Vec<LinkRecord>, AppError> {
        let links = self.links.read().await;
        let mut records: Vec<LinkRecord> = links.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}
