use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsEntry::Id))
                    .col(integer(NewsEntry::AuthorId))
                    .col(
                        timestamp(NewsEntry::PubDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(NewsEntry::Slug))
                    .col(string_len(NewsEntry::Title, 250))
                    .col(text(NewsEntry::Body))
                    .col(text(NewsEntry::BodyHtml).default(""))
                    .col(text_null(NewsEntry::Excerpt))
                    .col(text_null(NewsEntry::ExcerptHtml))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_entry_author_id")
                            .from(NewsEntry::Table, NewsEntry::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_entry_pub_date_slug")
                    .table(NewsEntry::Table)
                    .col(NewsEntry::PubDate)
                    .col(NewsEntry::Slug)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsEntry {
    Table,
    Id,
    AuthorId,
    PubDate,
    Slug,
    Title,
    Body,
    BodyHtml,
    Excerpt,
    ExcerptHtml,
}
