//! Phone factory for creating test phone entities.
//!
//! This module provides factory methods for creating phone entities with sensible
//! defaults. Features assigned through the factory are linked through the
//! `phone_feature` junction table after the phone is inserted.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test phones with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let phone = PhoneFactory::new(&db, vendor.id)
///     .name("3310")
///     .state("approved")
///     .connection(Some("fbus"))
///     .build()
///     .await?;
/// ```
pub struct PhoneFactory<'a> {
    db: &'a DatabaseConnection,
    vendor_id: i32,
    name: String,
    state: String,
    created: DateTime<Utc>,
    connection: Option<String>,
    features: Vec<i32>,
}

impl<'a> PhoneFactory<'a> {
    /// Creates a new PhoneFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Phone {id}"`
    /// - state: `"approved"`
    /// - created: now
    /// - connection: `None`
    /// - features: none
    pub fn new(db: &'a DatabaseConnection, vendor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            vendor_id,
            name: format!("Phone {}", id),
            state: "approved".to_string(),
            created: Utc::now(),
            connection: None,
            features: Vec::new(),
        }
    }

    /// Sets the phone model name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the lifecycle state (`approved`, `draft` or `deleted`).
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Sets the connection info.
    pub fn connection(mut self, connection: Option<&str>) -> Self {
        self.connection = connection.map(str::to_string);
        self
    }

    /// Links the phone to a feature by ID.
    pub fn feature(mut self, feature_id: i32) -> Self {
        self.features.push(feature_id);
        self
    }

    /// Builds and inserts the phone entity and its feature links.
    ///
    /// # Returns
    /// - `Ok(entity::phone::Model)` - Created phone entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::phone::Model, DbErr> {
        let phone = entity::phone::ActiveModel {
            id: ActiveValue::NotSet,
            vendor_id: ActiveValue::Set(self.vendor_id),
            name: ActiveValue::Set(self.name),
            state: ActiveValue::Set(self.state),
            created: ActiveValue::Set(self.created),
            connection: ActiveValue::Set(self.connection),
        }
        .insert(self.db)
        .await?;

        for feature_id in self.features {
            entity::phone_feature::ActiveModel {
                phone_id: ActiveValue::Set(phone.id),
                feature_id: ActiveValue::Set(feature_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(phone)
    }
}

/// Creates an approved phone with default values for the given vendor.
pub async fn create_phone(
    db: &DatabaseConnection,
    vendor_id: i32,
) -> Result<entity::phone::Model, DbErr> {
    PhoneFactory::new(db, vendor_id).build().await
}
