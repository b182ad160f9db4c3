use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::news_entry::Entity")]
    NewsEntry,
}

impl Related<super::news_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
