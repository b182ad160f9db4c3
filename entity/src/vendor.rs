use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vendor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::phone::Entity")]
    Phone,
}

impl Related<super::phone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
