//! Metadata fetching implementations.
//!
//! - [`HttpMetadataFetcher`] - reqwest + scraper implementation of
//!   [`MetadataFetcher`](crate::domain::repositories::MetadataFetcher)

pub mod http_metadata_fetcher;

pub use http_metadata_fetcher::HttpMetadataFetcher;
