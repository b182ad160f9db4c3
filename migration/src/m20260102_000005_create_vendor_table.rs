use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(pk_auto(Vendor::Id))
                    .col(string(Vendor::Name))
                    .col(string_uniq(Vendor::Slug))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vendor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vendor {
    Table,
    Id,
    Name,
    Slug,
}
