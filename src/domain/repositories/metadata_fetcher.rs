//! Collaborator trait for fetching preview metadata from a remote page.

use crate::domain::entities::PageMetadata;
use crate::error::AppError;
use async_trait::async_trait;

/// Fetches a page and extracts its preview metadata.
///
/// Used only before link creation; the resolution path never touches it,
/// so network latency and retry policy stay off the hot path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetches `url` and extracts `{title, description, image}`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unusable URLs and
    /// [`AppError::Internal`] when the page cannot be fetched.
    async fn fetch(&self, url: &str) -> Result<PageMetadata, AppError>;
}
