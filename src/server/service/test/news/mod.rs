use crate::server::{
    error::AppError,
    model::news::{SaveCategoryParam, SaveEntryParam},
    service::news::NewsService,
};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod get_category_page;
mod get_entries;
