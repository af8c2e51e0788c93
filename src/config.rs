//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PUBLIC_BASE_URL` - Public origin of this service, used for canonical
//!   short URLs and `og:url` (default: `http://localhost:3000`)
//! - `STORE_PATH` - Path to a JSON file for persistent storage; when unset,
//!   links live in memory only
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEEP_LINK_SCHEME` - Custom URL scheme of the target native app
//!   (default: `shopee`)
//! - `ANDROID_PACKAGE` - Android package used in intent URLs
//!   (default: `com.shopee.my`)
//! - `FB_APP_ID` - Optional Facebook app id embedded in preview documents
//! - `EXTRA_CRAWLER_SIGNATURES` - Comma-separated additions to the crawler
//!   signature list
//! - `METADATA_TIMEOUT_SECS` - Per-request timeout for metadata fetches
//!   (default: 15)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub public_base_url: String,
    pub store_path: Option<PathBuf>,
    pub log_level: String,
    pub log_format: String,
    pub deep_link_scheme: String,
    pub android_package: String,
    pub fb_app_id: Option<String>,
    pub extra_crawler_signatures: Vec<String>,
    pub metadata_timeout_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let store_path = env::var("STORE_PATH").ok().map(PathBuf::from);
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let deep_link_scheme =
            env::var("DEEP_LINK_SCHEME").unwrap_or_else(|_| "shopee".to_string());
        let android_package =
            env::var("ANDROID_PACKAGE").unwrap_or_else(|_| "com.shopee.my".to_string());
        let fb_app_id = env::var("FB_APP_ID").ok().filter(|v| !v.is_empty());

        let extra_crawler_signatures = env::var("EXTRA_CRAWLER_SIGNATURES")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let metadata_timeout_secs = env::var("METADATA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        Self {
            listen_addr,
            public_base_url,
            store_path,
            log_level,
            log_format,
            deep_link_scheme,
            android_package,
            fb_app_id,
            extra_crawler_signatures,
            metadata_timeout_secs,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `public_base_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `deep_link_scheme` is empty or contains non-alphanumeric characters
    /// - `metadata_timeout_secs` is zero or over 120
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.public_base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.deep_link_scheme.is_empty()
            || !self
                .deep_link_scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            anyhow::bail!(
                "DEEP_LINK_SCHEME must be a non-empty alphanumeric scheme, got '{}'",
                self.deep_link_scheme
            );
        }

        if self.metadata_timeout_secs == 0 || self.metadata_timeout_secs > 120 {
            anyhow::bail!(
                "METADATA_TIMEOUT_SECS must be between 1 and 120, got {}",
                self.metadata_timeout_secs
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Public base URL: {}", self.public_base_url);

        match &self.store_path {
            Some(path) => tracing::info!("  Store: JSON file at {}", path.display()),
            None => tracing::info!("  Store: in-memory"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Deep link: {}:// (package {})",
            self.deep_link_scheme,
            self.android_package
        );
        if !self.extra_crawler_signatures.is_empty() {
            tracing::info!(
                "  Extra crawler signatures: {}",
                self.extra_crawler_signatures.join(", ")
            );
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g. via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
