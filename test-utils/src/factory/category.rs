//! News category factory for creating test category entities.
//!
//! Rows are inserted directly, so `description_html` holds whatever the factory sets
//! rather than a rendering of `description`. Use the category repository when a test
//! depends on the rendered HTML.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    description: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Category {id}"`
    /// - slug: `"category-{id}"`
    /// - description: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Category {}", id),
            slug: format!("category-{}", id),
            description: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::news_category::Model, DbErr> {
        entity::news_category::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
            description_html: ActiveValue::Set(String::new()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::news_category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
