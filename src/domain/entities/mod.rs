//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`LinkRecord`] - A short link with preview metadata and a click counter
//! - [`NewLink`] - Creation input for a link
//! - [`PageMetadata`] - Preview metadata extracted from a remote page

pub mod link;
pub mod metadata;

pub use link::{LinkRecord, NewLink};
pub use metadata::PageMetadata;
