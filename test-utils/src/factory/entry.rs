//! News entry factory for creating test entry entities.
//!
//! Like the category factory, rows are inserted directly with empty derived HTML.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let entry = EntryFactory::new(&db, author.id)
///     .slug("gammu-1-0")
///     .pub_date(Utc.with_ymd_and_hms(2009, 3, 7, 12, 0, 0).unwrap())
///     .category(releases.id)
///     .build()
///     .await?;
/// ```
pub struct EntryFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    pub_date: DateTime<Utc>,
    slug: String,
    title: String,
    body: String,
    categories: Vec<i32>,
}

impl<'a> EntryFactory<'a> {
    /// Creates a new EntryFactory with default values.
    ///
    /// Defaults:
    /// - pub_date: now
    /// - slug: `"entry-{id}"`
    /// - title: `"Entry {id}"`
    /// - body: empty
    /// - categories: none
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            pub_date: Utc::now(),
            slug: format!("entry-{}", id),
            title: format!("Entry {}", id),
            body: String::new(),
            categories: Vec::new(),
        }
    }

    pub fn pub_date(mut self, pub_date: DateTime<Utc>) -> Self {
        self.pub_date = pub_date;
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Links the entry to a category by ID.
    pub fn category(mut self, category_id: i32) -> Self {
        self.categories.push(category_id);
        self
    }

    /// Builds and inserts the entry and its category links.
    pub async fn build(self) -> Result<entity::news_entry::Model, DbErr> {
        let entry = entity::news_entry::ActiveModel {
            id: ActiveValue::NotSet,
            author_id: ActiveValue::Set(self.author_id),
            pub_date: ActiveValue::Set(self.pub_date),
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            body_html: ActiveValue::Set(String::new()),
            excerpt: ActiveValue::Set(None),
            excerpt_html: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        for category_id in self.categories {
            entity::news_entry_category::ActiveModel {
                entry_id: ActiveValue::Set(entry.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(entry)
    }
}

/// Creates an entry with default values for the given author.
pub async fn create_entry(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::news_entry::Model, DbErr> {
    EntryFactory::new(db, author_id).build().await
}
