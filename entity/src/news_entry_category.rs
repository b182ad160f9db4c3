use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news_entry_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub entry_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::news_entry::Entity",
        from = "Column::EntryId",
        to = "super::news_entry::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    NewsEntry,
    #[sea_orm(
        belongs_to = "super::news_category::Entity",
        from = "Column::CategoryId",
        to = "super::news_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    NewsCategory,
}

impl Related<super::news_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsEntry.def()
    }
}

impl Related<super::news_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
