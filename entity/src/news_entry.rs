use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author_id: i32,
    pub pub_date: DateTimeUtc,
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    #[sea_orm(column_type = "Text")]
    pub body_html: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt_html: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::news_entry_category::Entity")]
    NewsEntryCategory,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::news_entry_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsEntryCategory.def()
    }
}

impl Related<super::news_category::Entity> for Entity {
    fn to() -> RelationDef {
        super::news_entry_category::Relation::NewsCategory.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::news_entry_category::Relation::NewsEntry.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
