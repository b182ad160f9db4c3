//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Cache service holding the memoized phonedb chart URL
//! - Site settings such as page sizes and the chart service base URL

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{config::Config, service::cache::CacheService};

/// Listing sizes and external endpoints consumed by the views.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    /// Page size for phone search and vendor listings.
    pub phones_per_page: u64,
    /// Number of newest phones shown on the phonedb index.
    pub phones_on_index: u64,
    /// Page size for news entry listings.
    pub entries_per_page: u64,
    /// Base URL of the chart rendering service, ending in `?`.
    pub chart_base_url: String,
}

impl SiteSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            phones_per_page: config.phones_per_page,
            phones_on_index: config.phones_on_index,
            entries_per_page: config.entries_per_page,
            chart_base_url: config.chart_base_url.clone(),
        }
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `CacheService` uses an `Arc` internally
/// - `Arc<SiteSettings>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Process-wide cache with per-key expiry.
    pub cache: CacheService,

    /// Listing sizes and chart service configuration.
    pub settings: Arc<SiteSettings>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - Shared cache service
    /// - `settings` - Site settings derived from configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, cache: CacheService, settings: SiteSettings) -> Self {
        Self {
            db,
            cache,
            settings: Arc::new(settings),
        }
    }
}
