use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::phone_feature::Entity")]
    PhoneFeature,
}

impl Related<super::phone_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PhoneFeature.def()
    }
}

impl Related<super::phone::Entity> for Entity {
    fn to() -> RelationDef {
        super::phone_feature::Relation::Phone.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::phone_feature::Relation::Feature.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
