//! Feature factory for creating phone feature entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a feature with the given name.
///
/// Feature names are unique, so tests pass explicit names rather than relying on
/// generated defaults.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Unique feature name
///
/// # Returns
/// - `Ok(entity::feature::Model)` - Created feature entity
/// - `Err(DbErr)` - Database error during insert (including duplicate names)
pub async fn create_feature(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::feature::Model, DbErr> {
    entity::feature::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}
