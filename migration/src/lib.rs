pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_news_category_table;
mod m20260101_000003_create_news_entry_table;
mod m20260101_000004_create_news_entry_category_table;
mod m20260102_000005_create_vendor_table;
mod m20260102_000006_create_phone_table;
mod m20260102_000007_create_feature_table;
mod m20260102_000008_create_phone_feature_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_news_category_table::Migration),
            Box::new(m20260101_000003_create_news_entry_table::Migration),
            Box::new(m20260101_000004_create_news_entry_category_table::Migration),
            Box::new(m20260102_000005_create_vendor_table::Migration),
            Box::new(m20260102_000006_create_phone_table::Migration),
            Box::new(m20260102_000007_create_feature_table::Migration),
            Box::new(m20260102_000008_create_phone_feature_table::Migration),
        ]
    }
}
