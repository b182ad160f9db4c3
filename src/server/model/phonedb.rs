//! Phone database domain models and parameters.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::phonedb::{FeatureDto, PhoneDto, PhoneListingDto, VendorDto},
    server::error::{internal::InternalError, AppError},
};

/// Lifecycle state of a phone record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneState {
    /// Reviewed and public.
    Approved,
    /// Public but not yet reviewed.
    Draft,
    /// Never shown publicly.
    Deleted,
}

impl PhoneState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Draft => "draft",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for PhoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneState {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "draft" => Ok(Self::Draft),
            "deleted" => Ok(Self::Deleted),
            other => Err(InternalError::UnknownPhoneState(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl Vendor {
    pub fn from_entity(entity: entity::vendor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }

    pub fn into_dto(self) -> VendorDto {
        VendorDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: i32,
    pub name: String,
}

impl Feature {
    pub fn from_entity(entity: entity::feature::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> FeatureDto {
        FeatureDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phone {
    pub id: i32,
    pub vendor_id: i32,
    pub name: String,
    pub state: PhoneState,
    pub created: DateTime<Utc>,
    /// Connection used to talk to the phone; `None` means it is unsupported.
    pub connection: Option<String>,
}

impl Phone {
    /// Converts an entity model to a phone domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Phone)` - The converted phone
    /// - `Err(AppError::InternalErr(UnknownPhoneState))` - Stored state is not recognised
    pub fn from_entity(entity: entity::phone::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            vendor_id: entity.vendor_id,
            name: entity.name,
            state: entity.state.parse()?,
            created: entity.created,
            connection: entity.connection,
        })
    }

    pub fn into_dto(self) -> PhoneDto {
        PhoneDto {
            id: self.id,
            vendor_id: self.vendor_id,
            name: self.name,
            state: self.state.to_string(),
            created: self.created,
            connection: self.connection,
        }
    }
}

/// A phone paired with its vendor.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneListing {
    pub phone: Phone,
    pub vendor: Vendor,
}

impl PhoneListing {
    pub fn into_dto(self) -> PhoneListingDto {
        PhoneListingDto {
            phone: self.phone.into_dto(),
            vendor: self.vendor.into_dto(),
        }
    }
}

/// Search inputs as received from the request.
#[derive(Debug, Clone, Default)]
pub struct SearchPhonesParam {
    /// Free-text query; `None` when the `q` parameter is absent.
    pub query: Option<String>,
    /// Feature names every result must carry.
    pub features: Vec<String>,
    /// Raw `page` parameter.
    pub page: Option<String>,
}

impl SearchPhonesParam {
    /// Query string reproducing this search, used to build pagination links.
    ///
    /// Features come first, then the query, joined with `&`.
    pub fn urlparams(&self) -> String {
        let mut params: Vec<String> = self
            .features
            .iter()
            .map(|feature| format!("feature={}", feature))
            .collect();

        if let Some(query) = &self.query {
            params.push(format!("q={}", query));
        }

        params.join("&")
    }

    /// Whitespace-separated query tokens, empty when there is no query.
    pub fn query_tokens(&self) -> Vec<&str> {
        self.query
            .as_deref()
            .map(|query| query.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// Index page data apart from the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PhonedbIndex {
    pub vendors: Vec<Vendor>,
    pub phones: Vec<PhoneListing>,
    pub features: Vec<Feature>,
}

/// Vendor page: the vendor and one page of its approved phones.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorPage {
    pub vendor: Vendor,
    pub phones: super::pagination::Page<Phone>,
}

/// Phone detail page data.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneDetail {
    pub vendor: Vendor,
    pub phone: Phone,
    pub features: Vec<Feature>,
    pub related: Vec<Phone>,
}
