//! Store trait for short link data access.

use crate::domain::entities::LinkRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for short links.
///
/// The store exclusively owns the collection of records. Resolution depends
/// only on [`LinkStore::get`] and [`LinkStore::record_hit`]; the remaining
/// operations serve the administrative API.
///
/// # Implementations
///
/// - `crate::infrastructure::persistence::MemoryLinkStore` - in-memory map
/// - `crate::infrastructure::persistence::JsonFileLinkStore` - JSON file backed
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Read-only lookup by code. Never mutates.
    async fn get(&self, code: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Atomically increments the click counter for `code` and returns the
    /// post-increment record, or `None` when the code is unknown.
    ///
    /// Implementations must serialize the read-modify-write: N concurrent
    /// calls for the same code yield exactly N increments, and no caller
    /// observes a partially updated record.
    async fn record_hit(&self, code: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists; an existing
    /// record is never overwritten.
    async fn insert(&self, record: LinkRecord) -> Result<LinkRecord, AppError>;

    /// Removes a record. Returns `true` if it existed. Subsequent lookups
    /// of the code resolve to `None`.
    async fn remove(&self, code: &str) -> Result<bool, AppError>;

    /// Lists up to `limit` records, newest first.
    async fn list(&self, limit: usize) -> Result<Vec<LinkRecord>, AppError>;
}
