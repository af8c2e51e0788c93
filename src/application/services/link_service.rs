//! Link creation, listing, and deletion service.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::entities::{LinkRecord, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Administrative operations on links.
///
/// Creation validates the destination and generates a unique code; the store
/// enforces uniqueness at insertion, so a collision surfaces as a conflict
/// and is retried with a fresh code.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Creates a link with a freshly generated unique code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the destination URL is empty or
    /// not an absolute http(s) URL, and [`AppError::Internal`] if code
    /// generation keeps colliding.
    pub async fn create_link(&self, new_link: NewLink) -> Result<LinkRecord, AppError> {
        validate_destination(&new_link.destination_url)?;

        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();
            match self
                .store
                .insert(LinkRecord::create(code, new_link.clone()))
                .await
            {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Lists up to `limit` links, newest first.
    pub async fn list_links(&self, limit: usize) -> Result<Vec<LinkRecord>, AppError> {
        self.store.list(limit).await
    }

    /// Deletes a link. Returns `true` if it existed; the code resolves as
    /// not-found from then on.
    pub async fn delete_link(&self, code: &str) -> Result<bool, AppError> {
        self.store.remove(code).await
    }

    /// Constructs the public short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/s/{}", base_url.trim_end_matches('/'), code)
    }
}

fn validate_destination(destination_url: &str) -> Result<(), AppError> {
    if destination_url.is_empty() {
        return Err(AppError::bad_request(
            "Destination URL is required",
            json!({}),
        ));
    }

    let parsed = Url::parse(destination_url).map_err(|e| {
        AppError::bad_request(
            "Invalid destination URL",
            json!({ "url": destination_url, "reason": e.to_string() }),
        )
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "Destination URL must use http or https",
            json!({ "url": destination_url, "scheme": parsed.scheme() }),
        ));
    }

    Ok(())
}
