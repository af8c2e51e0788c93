//! Application layer services implementing business logic.
//!
//! - [`services::link_service::LinkService`] - link creation, listing, deletion
//! - [`services::render_service::RenderService`] - preview / interactive
//!   document rendering

pub mod services;
