use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000005_create_vendor_table::Vendor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Phone::Table)
                    .if_not_exists()
                    .col(pk_auto(Phone::Id))
                    .col(integer(Phone::VendorId))
                    .col(string(Phone::Name))
                    .col(string_len(Phone::State, 20).default("draft"))
                    .col(
                        timestamp(Phone::Created)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(Phone::Connection))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phone_vendor_id")
                            .from(Phone::Table, Phone::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_phone_created")
                    .table(Phone::Table)
                    .col(Phone::Created)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Phone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Phone {
    Table,
    Id,
    VendorId,
    Name,
    State,
    Created,
    Connection,
}
