//! Trait definitions for data access and external collaborators.
//!
//! Traits define the contract; concrete implementations live in
//! `crate::infrastructure`. Mock implementations are auto-generated via
//! `mockall` for testing.
//!
//! - [`LinkStore`] - short link storage with atomic click accounting
//! - [`MetadataFetcher`] - creation-time page metadata extraction

pub mod link_store;
pub mod metadata_fetcher;

pub use link_store::LinkStore;
pub use metadata_fetcher::MetadataFetcher;

#[cfg(test)]
pub use link_store::MockLinkStore;
#[cfg(test)]
pub use metadata_fetcher::MockMetadataFetcher;
