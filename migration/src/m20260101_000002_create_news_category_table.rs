use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsCategory::Id))
                    .col(string_len(NewsCategory::Title, 250))
                    .col(string_uniq(NewsCategory::Slug))
                    .col(text(NewsCategory::Description))
                    .col(text(NewsCategory::DescriptionHtml).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsCategory {
    Table,
    Id,
    Title,
    Slug,
    Description,
    DescriptionHtml,
}
