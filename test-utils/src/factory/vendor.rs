//! Vendor factory for creating test vendor entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vendors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let vendor = VendorFactory::new(&db)
///     .name("Nokia")
///     .slug("nokia")
///     .build()
///     .await?;
/// ```
pub struct VendorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
}

impl<'a> VendorFactory<'a> {
    /// Creates a new VendorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vendor {id}"`
    /// - slug: `"vendor-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vendor {}", id),
            slug: format!("vendor-{}", id),
        }
    }

    /// Sets the vendor display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the vendor slug used in URLs.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Builds and inserts the vendor entity into the database.
    pub async fn build(self) -> Result<entity::vendor::Model, DbErr> {
        entity::vendor::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vendor with default values.
pub async fn create_vendor(db: &DatabaseConnection) -> Result<entity::vendor::Model, DbErr> {
    VendorFactory::new(db).build().await
}
