use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct VendorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VendorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all vendors ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::vendor::Model>, DbErr> {
        entity::prelude::Vendor::find()
            .order_by_asc(entity::vendor::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets a vendor by its slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::vendor::Model>, DbErr> {
        entity::prelude::Vendor::find()
            .filter(entity::vendor::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }
}
