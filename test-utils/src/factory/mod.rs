//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let vendor = factory::vendor::create_vendor(&db).await?;
//! let phone = factory::phone::create_phone(&db, vendor.id).await?;
//!
//! let gprs = factory::feature::create_feature(&db, "gprs").await?;
//! let phone = factory::phone::PhoneFactory::new(&db, vendor.id)
//!     .name("6310i")
//!     .connection(Some("at"))
//!     .feature(gprs.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user (news author) entities
//! - `category` - Create news category entities
//! - `entry` - Create news entry entities and their category links
//! - `vendor` - Create phone vendor entities
//! - `phone` - Create phone entities and their feature links
//! - `feature` - Create feature entities
//! - `helpers` - Shared ID generation

pub mod category;
pub mod entry;
pub mod feature;
pub mod helpers;
pub mod phone;
pub mod user;
pub mod vendor;

pub use category::create_category;
pub use entry::create_entry;
pub use feature::create_feature;
pub use phone::create_phone;
pub use user::create_user;
pub use vendor::create_vendor;
