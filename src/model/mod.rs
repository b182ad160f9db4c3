//! Response DTOs shared by the HTTP layer.
//!
//! These types are the serialized context each page template consumes. They carry no
//! database types and are produced from server-side domain models via `into_dto`.

pub mod api;
pub mod news;
pub mod phonedb;
