//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the traits defined by the domain layer:
//!
//! - [`persistence`] - Link store backends (memory, JSON file)
//! - [`metadata`] - HTTP page metadata fetching

pub mod metadata;
pub mod persistence;
