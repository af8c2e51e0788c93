//! HTTP layer: handlers, DTOs, middleware, and routes.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers (resolution + administration)
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Administrative route composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
