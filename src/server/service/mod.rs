//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Search filtering, pagination and slug validation
//! - **Orchestration**: Coordinating multiple repository calls per page
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! `markdown` and `cache` are standalone helpers used by the repositories and the chart
//! service respectively.

pub mod cache;
pub mod chart;
pub mod markdown;
pub mod news;
pub mod phonedb;

#[cfg(test)]
mod test;
