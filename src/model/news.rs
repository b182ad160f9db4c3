use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PageDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub description_html: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EntryDto {
    pub id: i32,
    pub author_id: i32,
    pub pub_date: DateTime<Utc>,
    pub slug: String,
    pub title: String,
    pub body_html: String,
    pub excerpt_html: Option<String>,
    pub categories: Vec<CategoryDto>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedEntriesDto {
    pub entries: Vec<EntryDto>,
    pub page: PageDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryPageDto {
    pub category: CategoryDto,
    pub entries: Vec<EntryDto>,
    pub page: PageDto,
}
