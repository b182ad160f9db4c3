use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        news::{CategoryListDto, CategoryPageDto, EntryDto, PaginatedEntriesDto},
    },
    server::{
        error::AppError, model::news::Entry, service::news::NewsService, state::AppState,
        util::parse::parse_page,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// List all news categories.
///
/// # Returns
/// - `200 OK` - Categories ordered by title
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/news/categories",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "Categories ordered by title", body = CategoryListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = NewsService::new(&state.db).get_categories().await?;

    Ok((
        StatusCode::OK,
        Json(CategoryListDto {
            categories: categories.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Get a category with one page of its entries.
///
/// # Arguments
/// - `slug` - Category slug
/// - `page` - Query parameter; invalid values are clamped to a valid page
///
/// # Returns
/// - `200 OK` - Category and entries, newest first
/// - `404 Not Found` - No category with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/news/categories/{slug}",
    tag = NEWS_TAG,
    params(
        ("slug" = String, Path, description = "Category slug"),
        ("page" = Option<String>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Category and its entries", body = CategoryPageDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(query.as_deref());

    let result = NewsService::new(&state.db)
        .get_category_page(&slug, page.as_deref(), state.settings.entries_per_page)
        .await?;

    let (entries, page) = result.entries.map(Entry::into_dto).into_parts();

    Ok((
        StatusCode::OK,
        Json(CategoryPageDto {
            category: result.category.into_dto(),
            entries,
            page,
        }),
    ))
}

/// Get one page of all entries, newest first.
///
/// # Returns
/// - `200 OK` - Entries and pagination metadata
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/news/entries",
    tag = NEWS_TAG,
    params(
        ("page" = Option<String>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Entry archive page", body = PaginatedEntriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entries(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(query.as_deref());

    let result = NewsService::new(&state.db)
        .get_entries(page.as_deref(), state.settings.entries_per_page)
        .await?;

    let (entries, page) = result.map(Entry::into_dto).into_parts();

    Ok((StatusCode::OK, Json(PaginatedEntriesDto { entries, page })))
}

/// Get the most recently published entry.
///
/// # Returns
/// - `200 OK` - Latest entry
/// - `404 Not Found` - No entries exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/news/latest",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "Latest entry", body = EntryDto),
        (status = 404, description = "No entries published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_entry(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entry = NewsService::new(&state.db).get_latest().await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Get an entry by publication date and slug.
///
/// # Returns
/// - `200 OK` - The entry
/// - `404 Not Found` - No such entry, or the date does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/news/{year}/{month}/{day}/{slug}",
    tag = NEWS_TAG,
    params(
        ("year" = i32, Path, description = "Publication year"),
        ("month" = u32, Path, description = "Publication month, 1-12"),
        ("day" = u32, Path, description = "Publication day of month"),
        ("slug" = String, Path, description = "Entry slug")
    ),
    responses(
        (status = 200, description = "The entry", body = EntryDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path((year, month, day, slug)): Path<(i32, u32, u32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let entry = NewsService::new(&state.db)
        .get_entry(year, month, day, &slug)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}
