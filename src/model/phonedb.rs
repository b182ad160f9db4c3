use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PageDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VendorDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhoneDto {
    pub id: i32,
    pub vendor_id: i32,
    pub name: String,
    pub state: String,
    pub created: DateTime<Utc>,
    pub connection: Option<String>,
}

/// A phone together with its vendor, as shown in cross-vendor listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhoneListingDto {
    pub phone: PhoneDto,
    pub vendor: VendorDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhonedbIndexDto {
    pub vendors: Vec<VendorDto>,
    pub phones: Vec<PhoneListingDto>,
    pub features: Vec<FeatureDto>,
    pub chart_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    pub phones: Vec<PhoneListingDto>,
    pub page: PageDto,
    /// Query string that reproduces the search, for building pagination links.
    pub urlparams: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VendorPageDto {
    pub vendor: VendorDto,
    pub phones: Vec<PhoneDto>,
    pub page: PageDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhoneDetailDto {
    pub vendor: VendorDto,
    pub phone: PhoneDto,
    pub features: Vec<FeatureDto>,
    pub related: Vec<PhoneDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartDto {
    pub chart_url: String,
}
