use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, sea_query::LikeExpr,
};

use crate::server::model::phonedb::PhoneState;

type PhoneWithVendor = (entity::phone::Model, Option<entity::vendor::Model>);

/// Builds a `LIKE` pattern matching `text` literally anywhere in a value.
///
/// `%` and `_` in `text` are escaped so they only match themselves.
fn substring_pattern(text: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

/// Accumulates phone search predicates, applied conjunctively.
///
/// Every filter starts by excluding deleted phones. Each feature and each query token adds
/// one more clause, so the result set only ever narrows.
#[derive(Debug, Clone)]
pub struct PhoneSearchFilter {
    condition: Condition,
}

impl PhoneSearchFilter {
    pub fn new() -> Self {
        Self {
            condition: Condition::all()
                .add(entity::phone::Column::State.ne(PhoneState::Deleted.as_str())),
        }
    }

    /// Requires connection info and every named feature.
    ///
    /// No-op when `names` is empty.
    pub fn with_features(mut self, names: &[String]) -> Self {
        if names.is_empty() {
            return self;
        }

        self.condition = self
            .condition
            .add(entity::phone::Column::Connection.is_not_null());

        for name in names {
            let feature_ids = entity::prelude::Feature::find()
                .select_only()
                .column(entity::feature::Column::Id)
                .filter(entity::feature::Column::Name.eq(name.as_str()))
                .into_query();

            let phone_ids = entity::prelude::PhoneFeature::find()
                .select_only()
                .column(entity::phone_feature::Column::PhoneId)
                .filter(entity::phone_feature::Column::FeatureId.in_subquery(feature_ids))
                .into_query();

            self.condition = self
                .condition
                .add(entity::phone::Column::Id.in_subquery(phone_ids));
        }

        self
    }

    /// Requires every token to appear in the vendor name or the phone name.
    ///
    /// Matching is a case-insensitive substring match.
    pub fn with_tokens(mut self, tokens: &[&str]) -> Self {
        for token in tokens {
            let vendor_ids = entity::prelude::Vendor::find()
                .select_only()
                .column(entity::vendor::Column::Id)
                .filter(entity::vendor::Column::Name.like(substring_pattern(token)))
                .into_query();

            self.condition = self.condition.add(
                Condition::any()
                    .add(entity::phone::Column::Name.like(substring_pattern(token)))
                    .add(entity::phone::Column::VendorId.in_subquery(vendor_ids)),
            );
        }

        self
    }

    pub fn into_condition(self) -> Condition {
        self.condition
    }
}

impl Default for PhoneSearchFilter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PhoneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhoneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts phones matching a search filter
    pub async fn count_search(&self, filter: PhoneSearchFilter) -> Result<u64, DbErr> {
        entity::prelude::Phone::find()
            .filter(filter.into_condition())
            .count(self.db)
            .await
    }

    /// Gets a slice of phones matching a search filter, with their vendors.
    ///
    /// Ordered by vendor name, then phone name.
    pub async fn search(
        &self,
        filter: PhoneSearchFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PhoneWithVendor>, DbErr> {
        entity::prelude::Phone::find()
            .find_also_related(entity::prelude::Vendor)
            .filter(filter.into_condition())
            .order_by_asc(entity::vendor::Column::Name)
            .order_by_asc(entity::phone::Column::Name)
            .order_by_asc(entity::phone::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts the approved phones of a vendor
    pub async fn count_approved_by_vendor(&self, vendor_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Phone::find()
            .filter(entity::phone::Column::VendorId.eq(vendor_id))
            .filter(entity::phone::Column::State.eq(PhoneState::Approved.as_str()))
            .count(self.db)
            .await
    }

    /// Gets a slice of a vendor's approved phones ordered by name
    pub async fn get_approved_by_vendor(
        &self,
        vendor_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::phone::Model>, DbErr> {
        entity::prelude::Phone::find()
            .filter(entity::phone::Column::VendorId.eq(vendor_id))
            .filter(entity::phone::Column::State.eq(PhoneState::Approved.as_str()))
            .order_by_asc(entity::phone::Column::Name)
            .order_by_asc(entity::phone::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets a phone by ID, only if it belongs to `vendor_id`.
    ///
    /// Deleted phones are excluded too, so their detail page is a 404 like a missing phone.
    /// This is stricter than vendor ownership alone, which still resolves deleted phones.
    pub async fn get_by_id_for_vendor(
        &self,
        id: i32,
        vendor_id: i32,
    ) -> Result<Option<entity::phone::Model>, DbErr> {
        entity::prelude::Phone::find_by_id(id)
            .filter(entity::phone::Column::VendorId.eq(vendor_id))
            .filter(entity::phone::Column::State.ne(PhoneState::Deleted.as_str()))
            .one(self.db)
            .await
    }

    /// Gets other approved phones of the same vendor whose name contains `phone`'s name
    pub async fn get_related(
        &self,
        phone: &entity::phone::Model,
    ) -> Result<Vec<entity::phone::Model>, DbErr> {
        entity::prelude::Phone::find()
            .filter(entity::phone::Column::VendorId.eq(phone.vendor_id))
            .filter(entity::phone::Column::State.eq(PhoneState::Approved.as_str()))
            .filter(entity::phone::Column::Name.like(substring_pattern(&phone.name)))
            .filter(entity::phone::Column::Id.ne(phone.id))
            .order_by_asc(entity::phone::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the newest approved or draft phones with their vendors
    pub async fn get_latest(&self, limit: u64) -> Result<Vec<PhoneWithVendor>, DbErr> {
        entity::prelude::Phone::find()
            .find_also_related(entity::prelude::Vendor)
            .filter(entity::phone::Column::State.is_in([
                PhoneState::Approved.as_str(),
                PhoneState::Draft.as_str(),
            ]))
            .order_by_desc(entity::phone::Column::Created)
            .order_by_desc(entity::phone::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts non-deleted phones created in `[since, before)`.
    ///
    /// # Arguments
    /// - `since` - Inclusive lower bound on `created`
    /// - `before` - Exclusive upper bound on `created`
    /// - `supported` - Count phones with connection info when `true`, without when `false`
    pub async fn count_listed_between(
        &self,
        since: DateTime<Utc>,
        before: DateTime<Utc>,
        supported: bool,
    ) -> Result<u64, DbErr> {
        let connection = if supported {
            entity::phone::Column::Connection.is_not_null()
        } else {
            entity::phone::Column::Connection.is_null()
        };

        entity::prelude::Phone::find()
            .filter(entity::phone::Column::State.ne(PhoneState::Deleted.as_str()))
            .filter(connection)
            .filter(entity::phone::Column::Created.gte(since))
            .filter(entity::phone::Column::Created.lt(before))
            .count(self.db)
            .await
    }

    /// Counts phones in any state created before `before`
    pub async fn count_created_before(&self, before: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Phone::find()
            .filter(entity::phone::Column::Created.lt(before))
            .count(self.db)
            .await
    }
}
