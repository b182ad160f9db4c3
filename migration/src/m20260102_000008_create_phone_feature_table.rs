use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260102_000006_create_phone_table::Phone, m20260102_000007_create_feature_table::Feature,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhoneFeature::Table)
                    .if_not_exists()
                    .col(integer(PhoneFeature::PhoneId))
                    .col(integer(PhoneFeature::FeatureId))
                    .primary_key(
                        Index::create()
                            .col(PhoneFeature::PhoneId)
                            .col(PhoneFeature::FeatureId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phone_feature_phone_id")
                            .from(PhoneFeature::Table, PhoneFeature::PhoneId)
                            .to(Phone::Table, Phone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phone_feature_feature_id")
                            .from(PhoneFeature::Table, PhoneFeature::FeatureId)
                            .to(Feature::Table, Feature::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PhoneFeature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PhoneFeature {
    Table,
    PhoneId,
    FeatureId,
}
