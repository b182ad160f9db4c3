use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "phone_feature")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub phone_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub feature_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::phone::Entity",
        from = "Column::PhoneId",
        to = "super::phone::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Phone,
    #[sea_orm(
        belongs_to = "super::feature::Entity",
        from = "Column::FeatureId",
        to = "super::feature::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Feature,
}

impl Related<super::phone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phone.def()
    }
}

impl Related<super::feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
