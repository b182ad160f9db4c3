use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
    TransactionTrait,
};

use crate::server::{
    model::news::{Entry, SaveEntryParam},
    service::markdown::{self, RenderMode},
};

pub struct EntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates an entry and replaces its category set.
    ///
    /// The entry row and its category links are written in one transaction, so a failed
    /// link insert leaves the stored entry untouched.
    ///
    /// The body is rendered in safe mode and the excerpt, when non-blank, in standard mode.
    /// A missing publication date defaults to now for new entries and keeps the stored
    /// date for existing ones.
    ///
    /// # Arguments
    /// - `params` - Entry fields; `id: None` inserts a new entry
    ///
    /// # Returns
    /// - `Ok(Entry)` - The entry as stored, with its categories
    /// - `Err(DbErr::RecordNotFound)` - `params.id` does not exist
    /// - `Err(DbErr)` - Other database error
    pub async fn save(&self, params: SaveEntryParam) -> Result<Entry, DbErr> {
        let pub_date = match params.id {
            Some(id) => match params.pub_date {
                Some(pub_date) => pub_date,
                None => {
                    entity::prelude::NewsEntry::find_by_id(id)
                        .one(self.db)
                        .await?
                        .ok_or_else(|| {
                            DbErr::RecordNotFound(format!("News entry with id {} not found", id))
                        })?
                        .pub_date
                }
            },
            None => params.pub_date.unwrap_or_else(Utc::now),
        };

        let body_html = markdown::render(&params.body, RenderMode::Safe);
        let excerpt_html = params
            .excerpt
            .as_deref()
            .filter(|excerpt| !excerpt.trim().is_empty())
            .map(|excerpt| markdown::render(excerpt, RenderMode::Standard));

        let entry = entity::news_entry::ActiveModel {
            id: params.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            author_id: ActiveValue::Set(params.author_id),
            pub_date: ActiveValue::Set(pub_date),
            slug: ActiveValue::Set(params.slug),
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            body_html: ActiveValue::Set(body_html),
            excerpt: ActiveValue::Set(params.excerpt),
            excerpt_html: ActiveValue::Set(excerpt_html),
        };

        let txn = self.db.begin().await?;

        let model = match params.id {
            Some(_) => entry.update(&txn).await?,
            None => entry.insert(&txn).await?,
        };

        // Replace category links
        entity::prelude::NewsEntryCategory::delete_many()
            .filter(entity::news_entry_category::Column::EntryId.eq(model.id))
            .exec(&txn)
            .await?;

        for category_id in params.category_ids {
            entity::news_entry_category::ActiveModel {
                entry_id: ActiveValue::Set(model.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.with_categories(model).await
    }

    /// Gets an entry by ID with its categories
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Entry>, DbErr> {
        let entry = entity::prelude::NewsEntry::find_by_id(id)
            .one(self.db)
            .await?;

        match entry {
            Some(entry) => Ok(Some(self.with_categories(entry).await?)),
            None => Ok(None),
        }
    }

    /// Gets the entry published on `date` (UTC) with the given slug
    pub async fn get_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Entry>, DbErr> {
        let entry = entity::prelude::NewsEntry::find()
            .filter(published_on(date))
            .filter(entity::news_entry::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        match entry {
            Some(entry) => Ok(Some(self.with_categories(entry).await?)),
            None => Ok(None),
        }
    }

    /// Checks whether another entry published on `date` already uses `slug`.
    ///
    /// # Arguments
    /// - `date` - Calendar date (UTC) of publication
    /// - `slug` - Slug to check
    /// - `exclude_id` - Entry being updated, ignored in the check
    pub async fn slug_taken_on(
        &self,
        date: NaiveDate,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::NewsEntry::find()
            .filter(published_on(date))
            .filter(entity::news_entry::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::news_entry::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets the most recently published entry
    pub async fn get_latest(&self) -> Result<Option<Entry>, DbErr> {
        let entry = entity::prelude::NewsEntry::find()
            .order_by_desc(entity::news_entry::Column::PubDate)
            .order_by_desc(entity::news_entry::Column::Id)
            .one(self.db)
            .await?;

        match entry {
            Some(entry) => Ok(Some(self.with_categories(entry).await?)),
            None => Ok(None),
        }
    }

    /// Counts all entries, or only the entries of `category_id` when given
    pub async fn count(&self, category_id: Option<i32>) -> Result<u64, DbErr> {
        entries_in(category_id).count(self.db).await
    }

    /// Gets a slice of entries newest first, optionally restricted to one category
    pub async fn get_page(
        &self,
        category_id: Option<i32>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Entry>, DbErr> {
        let models = entries_in(category_id)
            .order_by_desc(entity::news_entry::Column::PubDate)
            .order_by_desc(entity::news_entry::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        let mut entries = Vec::with_capacity(models.len());
        for model in models {
            entries.push(self.with_categories(model).await?);
        }

        Ok(entries)
    }

    async fn with_categories(&self, entry: entity::news_entry::Model) -> Result<Entry, DbErr> {
        let categories = entry
            .find_related(entity::prelude::NewsCategory)
            .order_by_asc(entity::news_category::Column::Title)
            .all(self.db)
            .await?;

        Ok(Entry::from_entity(entry, categories))
    }
}

/// Half-open UTC range covering one calendar day.
fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

fn published_on(date: NaiveDate) -> Condition {
    let (start, end) = day_bounds(date);
    Condition::all()
        .add(entity::news_entry::Column::PubDate.gte(start))
        .add(entity::news_entry::Column::PubDate.lt(end))
}

/// All entries, or only the entries linked to `category_id` when given.
fn entries_in(category_id: Option<i32>) -> Select<entity::news_entry::Entity> {
    entity::prelude::NewsEntry::find().apply_if(category_id, |query, category_id| {
        let entry_ids = entity::prelude::NewsEntryCategory::find()
            .select_only()
            .column(entity::news_entry_category::Column::EntryId)
            .filter(entity::news_entry_category::Column::CategoryId.eq(category_id))
            .into_query();

        query.filter(entity::news_entry::Column::Id.in_subquery(entry_ids))
    })
}
