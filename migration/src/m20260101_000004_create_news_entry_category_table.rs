use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_news_category_table::NewsCategory,
    m20260101_000003_create_news_entry_table::NewsEntry,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsEntryCategory::Table)
                    .if_not_exists()
                    .col(integer(NewsEntryCategory::EntryId))
                    .col(integer(NewsEntryCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(NewsEntryCategory::EntryId)
                            .col(NewsEntryCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_entry_category_entry_id")
                            .from(NewsEntryCategory::Table, NewsEntryCategory::EntryId)
                            .to(NewsEntry::Table, NewsEntry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_entry_category_category_id")
                            .from(NewsEntryCategory::Table, NewsEntryCategory::CategoryId)
                            .to(NewsCategory::Table, NewsCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsEntryCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsEntryCategory {
    Table,
    EntryId,
    CategoryId,
}
