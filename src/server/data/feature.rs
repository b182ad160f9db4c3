use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait,
};

pub struct FeatureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeatureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all features ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::feature::Model>, DbErr> {
        entity::prelude::Feature::find()
            .order_by_asc(entity::feature::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the features of a phone ordered by name
    pub async fn get_by_phone(&self, phone_id: i32) -> Result<Vec<entity::feature::Model>, DbErr> {
        let feature_ids = entity::prelude::PhoneFeature::find()
            .select_only()
            .column(entity::phone_feature::Column::FeatureId)
            .filter(entity::phone_feature::Column::PhoneId.eq(phone_id))
            .into_query();

        entity::prelude::Feature::find()
            .filter(entity::feature::Column::Id.in_subquery(feature_ids))
            .order_by_asc(entity::feature::Column::Name)
            .all(self.db)
            .await
    }
}
