//! Domain layer containing business entities and logic.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access and collaborator trait definitions
//! - [`classifier`] - Pure requester classification from the User-Agent
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits define contracts implemented in
//! `crate::infrastructure`.

pub mod classifier;
pub mod entities;
pub mod repositories;
