//! News domain models and parameters.
//!
//! Categories and entries keep their markdown source alongside the rendered HTML. The
//! save parameters deliberately carry no HTML fields: the repository derives them from
//! the source text on every write.

use chrono::{DateTime, Utc};

use super::pagination::Page;
use crate::model::news::{CategoryDto, EntryDto};

/// A news category.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub title: String,
    /// Unique external identifier used in URLs.
    pub slug: String,
    /// Markdown source of the description.
    pub description: String,
    /// HTML rendered from `description` at the last save.
    pub description_html: String,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::news_category::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            description_html: entity.description_html,
        }
    }

    /// Canonical URL of the category page.
    pub fn absolute_url(&self) -> String {
        format!("/news/categories/{}", self.slug)
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            url: self.absolute_url(),
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            description_html: self.description_html,
        }
    }
}

/// A dated news entry with its categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i32,
    pub author_id: i32,
    pub pub_date: DateTime<Utc>,
    /// Unique among entries published on the same calendar date.
    pub slug: String,
    pub title: String,
    pub body: String,
    /// Body rendered with raw HTML removed.
    pub body_html: String,
    pub excerpt: Option<String>,
    pub excerpt_html: Option<String>,
    /// Categories ordered by title.
    pub categories: Vec<Category>,
}

impl Entry {
    /// Converts an entity model plus its categories to an entry domain model.
    pub fn from_entity(
        entity: entity::news_entry::Model,
        categories: Vec<entity::news_category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            pub_date: entity.pub_date,
            slug: entity.slug,
            title: entity.title,
            body: entity.body,
            body_html: entity.body_html,
            excerpt: entity.excerpt,
            excerpt_html: entity.excerpt_html,
            categories: categories.into_iter().map(Category::from_entity).collect(),
        }
    }

    /// Canonical URL of the entry, `/news/YYYY/MM/DD/slug`.
    pub fn absolute_url(&self) -> String {
        format!("/news/{}/{}", self.pub_date.format("%Y/%m/%d"), self.slug)
    }

    pub fn into_dto(self) -> EntryDto {
        EntryDto {
            url: self.absolute_url(),
            id: self.id,
            author_id: self.author_id,
            pub_date: self.pub_date,
            slug: self.slug,
            title: self.title,
            body_html: self.body_html,
            excerpt_html: self.excerpt_html,
            categories: self
                .categories
                .into_iter()
                .map(Category::into_dto)
                .collect(),
        }
    }
}

/// Category page: the category and one page of its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPage {
    pub category: Category,
    pub entries: Page<Entry>,
}

/// Parameters for creating (`id: None`) or updating a category.
#[derive(Debug, Clone)]
pub struct SaveCategoryParam {
    pub id: Option<i32>,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Parameters for creating (`id: None`) or updating an entry.
#[derive(Debug, Clone)]
pub struct SaveEntryParam {
    pub id: Option<i32>,
    pub author_id: i32,
    /// Publication timestamp. When `None`, new entries use the current time and
    /// existing entries keep their stored date.
    pub pub_date: Option<DateTime<Utc>>,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    /// Replaces the entry's full category set.
    pub category_ids: Vec<i32>,
}
