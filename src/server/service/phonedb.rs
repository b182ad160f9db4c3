use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        feature::FeatureRepository,
        phone::{PhoneRepository, PhoneSearchFilter},
        vendor::VendorRepository,
    },
    error::AppError,
    model::{
        pagination::{Page, Paginator, PAGE_ORPHANS},
        phonedb::{
            Feature, Phone, PhoneDetail, PhoneListing, PhonedbIndex, SearchPhonesParam, Vendor,
            VendorPage,
        },
    },
};

pub struct PhoneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhoneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches non-deleted phones by features and free text.
    ///
    /// Requested features narrow the results to supported phones carrying all of them;
    /// every whitespace-separated query token must match the vendor or phone name.
    /// Results are ordered by vendor name, then phone name.
    pub async fn search(
        &self,
        params: &SearchPhonesParam,
        per_page: u64,
    ) -> Result<Page<PhoneListing>, AppError> {
        let repo = PhoneRepository::new(self.db);

        let filter = PhoneSearchFilter::new()
            .with_features(&params.features)
            .with_tokens(&params.query_tokens());

        let paginator = Paginator::new(
            repo.count_search(filter.clone()).await?,
            per_page,
            PAGE_ORPHANS,
        );
        let window = paginator.window(paginator.clamp(params.page.as_deref()));

        let phones = repo
            .search(filter, window.offset, window.limit)
            .await?
            .into_iter()
            .map(into_listing)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(phones, window, &paginator))
    }

    /// Gets a vendor by slug and one page of its approved phones ordered by name
    pub async fn get_vendor_page(
        &self,
        slug: &str,
        page: Option<&str>,
        per_page: u64,
    ) -> Result<VendorPage, AppError> {
        let vendor = self.get_vendor(slug).await?;
        let repo = PhoneRepository::new(self.db);

        let paginator = Paginator::new(
            repo.count_approved_by_vendor(vendor.id).await?,
            per_page,
            PAGE_ORPHANS,
        );
        let window = paginator.window(paginator.clamp(page));

        let phones = repo
            .get_approved_by_vendor(vendor.id, window.offset, window.limit)
            .await?
            .into_iter()
            .map(Phone::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(VendorPage {
            vendor,
            phones: Page::new(phones, window, &paginator),
        })
    }

    /// Gets a phone of the given vendor with its features and related models.
    ///
    /// # Returns
    /// - `Ok(PhoneDetail)` - Phone details
    /// - `Err(AppError::NotFound)` - Unknown vendor, unknown phone, or phone of another vendor
    pub async fn get_phone_detail(&self, slug: &str, id: i32) -> Result<PhoneDetail, AppError> {
        let vendor = self.get_vendor(slug).await?;
        let repo = PhoneRepository::new(self.db);

        let phone = repo
            .get_by_id_for_vendor(id, vendor.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Phone {} not found for vendor '{}'", id, slug))
            })?;

        let related = repo
            .get_related(&phone)
            .await?
            .into_iter()
            .map(Phone::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let features = FeatureRepository::new(self.db)
            .get_by_phone(phone.id)
            .await?
            .into_iter()
            .map(Feature::from_entity)
            .collect();

        Ok(PhoneDetail {
            vendor,
            phone: Phone::from_entity(phone)?,
            features,
            related,
        })
    }

    /// Gets the index listings: all vendors, the newest `phones_on_index` public phones
    /// and all features
    pub async fn get_index(&self, phones_on_index: u64) -> Result<PhonedbIndex, AppError> {
        let vendors = VendorRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(Vendor::from_entity)
            .collect();

        let phones = PhoneRepository::new(self.db)
            .get_latest(phones_on_index)
            .await?
            .into_iter()
            .map(into_listing)
            .collect::<Result<Vec<_>, _>>()?;

        let features = FeatureRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(Feature::from_entity)
            .collect();

        Ok(PhonedbIndex {
            vendors,
            phones,
            features,
        })
    }

    async fn get_vendor(&self, slug: &str) -> Result<Vendor, AppError> {
        VendorRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .map(Vendor::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("Vendor '{}' not found", slug)))
    }
}

fn into_listing(
    (phone, vendor): (entity::phone::Model, Option<entity::vendor::Model>),
) -> Result<PhoneListing, AppError> {
    let vendor = vendor.ok_or_else(|| {
        AppError::InternalError(format!("Phone {} has no vendor", phone.id))
    })?;

    Ok(PhoneListing {
        phone: Phone::from_entity(phone)?,
        vendor: Vendor::from_entity(vendor),
    })
}
