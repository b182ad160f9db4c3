use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::news::{Category, SaveCategoryParam},
    service::markdown::{self, RenderMode},
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates a category, rendering its description to HTML.
    ///
    /// # Arguments
    /// - `params` - Category fields; `id: None` inserts a new category
    ///
    /// # Returns
    /// - `Ok(Category)` - The category as stored
    /// - `Err(DbErr::RecordNotUpdated)` - `params.id` does not exist
    /// - `Err(DbErr)` - Other database error, including a duplicate slug
    pub async fn save(&self, params: SaveCategoryParam) -> Result<Category, DbErr> {
        let description_html = markdown::render(&params.description, RenderMode::Standard);

        let category = entity::news_category::ActiveModel {
            id: params.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            description_html: ActiveValue::Set(description_html),
        };

        let model = match params.id {
            Some(_) => category.update(self.db).await?,
            None => category.insert(self.db).await?,
        };

        Ok(Category::from_entity(model))
    }

    /// Gets all categories ordered by title
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::NewsCategory::find()
            .order_by_asc(entity::news_category::Column::Title)
            .order_by_asc(entity::news_category::Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Gets a category by its slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Category>, DbErr> {
        let category = entity::prelude::NewsCategory::find()
            .filter(entity::news_category::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }
}
