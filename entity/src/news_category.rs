use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub description_html: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::news_entry_category::Entity")]
    NewsEntryCategory,
}

impl Related<super::news_entry_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsEntryCategory.def()
    }
}

impl Related<super::news_entry::Entity> for Entity {
    fn to() -> RelationDef {
        super::news_entry_category::Relation::NewsEntry.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::news_entry_category::Relation::NewsCategory.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
