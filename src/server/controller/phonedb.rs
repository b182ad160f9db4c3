use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        phonedb::{ChartDto, PhoneDetailDto, PhonedbIndexDto, SearchResultsDto, VendorPageDto},
    },
    server::{
        error::AppError,
        model::phonedb::{Phone, PhoneListing, SearchPhonesParam},
        service::{chart::ChartService, phonedb::PhoneService},
        state::AppState,
        util::parse::{parse_page, parse_search_query},
    },
};

/// Tag for grouping phone database endpoints in OpenAPI documentation
pub static PHONEDB_TAG: &str = "phonedb";

/// Get the phone database index.
///
/// Lists all vendors, the newest public phones, all features and the growth chart URL.
///
/// # Returns
/// - `200 OK` - Index data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/phonedb",
    tag = PHONEDB_TAG,
    responses(
        (status = 200, description = "Phone database index", body = PhonedbIndexDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let index = PhoneService::new(&state.db)
        .get_index(state.settings.phones_on_index)
        .await?;

    let chart_url = ChartService::new(&state.db, &state.cache, &state.settings.chart_base_url)
        .get_chart_url(Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(PhonedbIndexDto {
            vendors: index.vendors.into_iter().map(|v| v.into_dto()).collect(),
            phones: index.phones.into_iter().map(|p| p.into_dto()).collect(),
            features: index.features.into_iter().map(|f| f.into_dto()).collect(),
            chart_url,
        }),
    ))
}

/// Search phones.
///
/// # Arguments
/// - `q` - Free text; every whitespace-separated token must match vendor or phone name
/// - `feature` - Repeatable; results must support every listed feature
/// - `page` - 1-based page number, clamped to a valid page
///
/// # Returns
/// - `200 OK` - One page of matching phones
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/phonedb/search",
    tag = PHONEDB_TAG,
    params(
        ("q" = Option<String>, Query, description = "Free-text query"),
        ("feature" = Option<Vec<String>>, Query, description = "Required feature, repeatable"),
        ("page" = Option<String>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Matching phones", body = SearchResultsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_search_query(query.as_deref());

    search_phones(&state, params).await
}

/// Search phones supporting a feature.
///
/// The path feature is added to any `feature` query parameters.
///
/// # Returns
/// - `200 OK` - One page of matching phones
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/phonedb/search/feature/{name}",
    tag = PHONEDB_TAG,
    params(
        ("name" = String, Path, description = "Required feature name"),
        ("q" = Option<String>, Query, description = "Free-text query"),
        ("feature" = Option<Vec<String>>, Query, description = "Additional feature, repeatable"),
        ("page" = Option<String>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Matching phones", body = SearchResultsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_by_feature(
    State(state): State<AppState>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let mut params = parse_search_query(query.as_deref());
    params.features.push(name);

    search_phones(&state, params).await
}

async fn search_phones(
    state: &AppState,
    params: SearchPhonesParam,
) -> Result<impl IntoResponse, AppError> {
    let result = PhoneService::new(&state.db)
        .search(&params, state.settings.phones_per_page)
        .await?;

    let (phones, page) = result.map(PhoneListing::into_dto).into_parts();

    Ok((
        StatusCode::OK,
        Json(SearchResultsDto {
            phones,
            page,
            urlparams: params.urlparams(),
        }),
    ))
}

/// Get a vendor with one page of its approved phones.
///
/// # Returns
/// - `200 OK` - Vendor and phones ordered by name
/// - `404 Not Found` - No vendor with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/phonedb/vendors/{slug}",
    tag = PHONEDB_TAG,
    params(
        ("slug" = String, Path, description = "Vendor slug"),
        ("page" = Option<String>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Vendor and its phones", body = VendorPageDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(query.as_deref());

    let result = PhoneService::new(&state.db)
        .get_vendor_page(&slug, page.as_deref(), state.settings.phones_per_page)
        .await?;

    let (phones, page) = result.phones.map(Phone::into_dto).into_parts();

    Ok((
        StatusCode::OK,
        Json(VendorPageDto {
            vendor: result.vendor.into_dto(),
            phones,
            page,
        }),
    ))
}

/// Get a phone of a vendor with its features and related models.
///
/// # Returns
/// - `200 OK` - Phone details
/// - `404 Not Found` - Unknown vendor or phone, or the phone belongs to another vendor
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/phonedb/vendors/{slug}/phones/{id}",
    tag = PHONEDB_TAG,
    params(
        ("slug" = String, Path, description = "Vendor slug"),
        ("id" = i32, Path, description = "Phone ID")
    ),
    responses(
        (status = 200, description = "Phone details", body = PhoneDetailDto),
        (status = 404, description = "Phone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_phone(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let detail = PhoneService::new(&state.db)
        .get_phone_detail(&slug, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PhoneDetailDto {
            vendor: detail.vendor.into_dto(),
            phone: detail.phone.into_dto(),
            features: detail.features.into_iter().map(|f| f.into_dto()).collect(),
            related: detail.related.into_iter().map(|p| p.into_dto()).collect(),
        }),
    ))
}

/// Get the catalog growth chart URL.
///
/// The URL is cached for an hour.
///
/// # Returns
/// - `200 OK` - Chart URL
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/phonedb/chart",
    tag = PHONEDB_TAG,
    responses(
        (status = 200, description = "Chart URL", body = ChartDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chart(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let chart_url = ChartService::new(&state.db, &state.cache, &state.settings.chart_base_url)
        .get_chart_url(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(ChartDto { chart_url })))
}
