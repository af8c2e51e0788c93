//! Link store implementations.
//!
//! Concrete implementations of the [`LinkStore`] trait:
//!
//! - [`MemoryLinkStore`] - in-memory map, the default backend
//! - [`JsonFileLinkStore`] - same map persisted to a JSON file (`STORE_PATH`)
//!
//! [`LinkStore`]: crate::domain::repositories::LinkStore

pub mod json_file_link_store;
pub mod memory_link_store;

pub use json_file_link_store::JsonFileLinkStore;
pub use memory_link_store::MemoryLinkStore;
