//! # linkpeek
//!
//! A crawler-aware short link resolver built with Axum.
//!
//! `GET /s/{code}` resolves a short code and renders one of two mutually
//! exclusive documents depending on who is asking:
//!
//! - **Crawlers** (social link-unfurlers, web indexers) get a static page of
//!   Open Graph / Twitter Card metadata and nothing else - no redirect, no
//!   script - so previews render from the initial response body.
//! - **Clients** (people) get an interactive page that tries to open a
//!   native app via a platform deep link, then falls back to the web
//!   destination through a staged, visibility-checked redirect sequence.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture layering:
//!
//! - **Domain** ([`domain`]) - entities, the `LinkStore` and
//!   `MetadataFetcher` traits, and the requester classifier
//! - **Application** ([`application`]) - link administration and document
//!   rendering services
//! - **Infrastructure** ([`infrastructure`]) - store backends (memory, JSON
//!   file) and the HTTP metadata fetcher
//! - **API** ([`api`]) - Axum handlers, DTOs, middleware, and routes
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: persist links to a JSON file
//! export STORE_PATH="./links.json"
//! export PUBLIC_BASE_URL="https://go.example"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, RenderService};
    pub use crate::domain::classifier::{Requester, RequesterClassifier};
    pub use crate::domain::entities::{LinkRecord, NewLink, PageMetadata};
    pub use crate::domain::repositories::{LinkStore, MetadataFetcher};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
