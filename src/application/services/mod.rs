//! Business logic services for the application layer.

pub mod link_service;
pub mod render_service;

pub use link_service::LinkService;
pub use render_service::RenderService;
