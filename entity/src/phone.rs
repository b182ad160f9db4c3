use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "phone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vendor_id: i32,
    pub name: String,
    /// One of `approved`, `draft` or `deleted`.
    pub state: String,
    pub created: DateTimeUtc,
    pub connection: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vendor,
    #[sea_orm(has_many = "super::phone_feature::Entity")]
    PhoneFeature,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::phone_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PhoneFeature.def()
    }
}

impl Related<super::feature::Entity> for Entity {
    fn to() -> RelationDef {
        super::phone_feature::Relation::Feature.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::phone_feature::Relation::Phone.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
