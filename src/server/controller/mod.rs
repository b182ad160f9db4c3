//! HTTP request handlers.
//!
//! Controllers extract path and query parameters, call the matching service and convert
//! the resulting domain models to DTOs. Every handler is annotated with `utoipa::path` so
//! the router can assemble the OpenAPI document from them.

pub mod news;
pub mod phonedb;
