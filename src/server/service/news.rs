use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, entry::EntryRepository},
    error::{internal::InternalError, AppError},
    model::{
        news::{Category, CategoryPage, Entry, SaveCategoryParam, SaveEntryParam},
        pagination::{Page, Paginator},
    },
};

/// Entry listings never fold a short trailing page into the previous one.
const ENTRY_ORPHANS: u64 = 0;

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a category; its HTML description is re-rendered on every save
    pub async fn save_category(&self, params: SaveCategoryParam) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.save(params).await?)
    }

    /// Creates or updates an entry.
    ///
    /// # Returns
    /// - `Ok(Entry)` - The saved entry with derived HTML and categories
    /// - `Err(AppError::BadRequest)` - Another entry already uses the slug on that date
    /// - `Err(AppError::NotFound)` - Updating an entry that does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn save_entry(&self, params: SaveEntryParam) -> Result<Entry, AppError> {
        let repo = EntryRepository::new(self.db);

        let pub_date = match (params.pub_date, params.id) {
            (Some(pub_date), _) => pub_date,
            (None, Some(id)) => {
                repo.get_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))?
                    .pub_date
            }
            (None, None) => Utc::now(),
        };

        if repo
            .slug_taken_on(pub_date.date_naive(), &params.slug, params.id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "An entry with slug '{}' already exists on {}",
                params.slug,
                pub_date.format("%Y-%m-%d")
            )));
        }

        let entry = repo
            .save(SaveEntryParam {
                pub_date: Some(pub_date),
                ..params
            })
            .await?;

        Ok(entry)
    }

    /// Gets all categories ordered by title
    pub async fn get_categories(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a category and one page of its entries, newest first
    pub async fn get_category_page(
        &self,
        slug: &str,
        page: Option<&str>,
        per_page: u64,
    ) -> Result<CategoryPage, AppError> {
        let category = CategoryRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;

        let entries = self.paginate(Some(category.id), page, per_page).await?;

        Ok(CategoryPage { category, entries })
    }

    /// Gets one page of all entries, newest first
    pub async fn get_entries(
        &self,
        page: Option<&str>,
        per_page: u64,
    ) -> Result<Page<Entry>, AppError> {
        self.paginate(None, page, per_page).await
    }

    /// Gets the most recently published entry
    pub async fn get_latest(&self) -> Result<Entry, AppError> {
        EntryRepository::new(self.db)
            .get_latest()
            .await?
            .ok_or_else(|| AppError::NotFound("No entries published yet".to_string()))
    }

    /// Gets an entry by its publication date and slug.
    ///
    /// A date that does not exist in the calendar is reported as not found.
    pub async fn get_entry(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<Entry, AppError> {
        let date = match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => date,
            None => {
                let err = InternalError::InvalidDate { year, month, day };
                tracing::debug!("{}", err);
                return Err(AppError::NotFound(err.to_string()));
            }
        };

        EntryRepository::new(self.db)
            .get_by_date_and_slug(date, slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Entry '{}' not found on {}", slug, date)))
    }

    async fn paginate(
        &self,
        category_id: Option<i32>,
        page: Option<&str>,
        per_page: u64,
    ) -> Result<Page<Entry>, AppError> {
        let repo = EntryRepository::new(self.db);

        let paginator = Paginator::new(repo.count(category_id).await?, per_page, ENTRY_ORPHANS);
        let window = paginator.window(paginator.clamp(page));
        let entries = repo
            .get_page(category_id, window.offset, window.limit)
            .await?;

        Ok(Page::new(entries, window, &paginator))
    }
}
