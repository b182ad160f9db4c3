use crate::server::{
    data::entry::EntryRepository,
    model::news::SaveEntryParam,
    service::markdown::{self, RenderMode, HTML_REMOVED},
};
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_latest;
mod save;

fn entry_params(author_id: i32, slug: &str) -> SaveEntryParam {
    SaveEntryParam {
        id: None,
        author_id,
        pub_date: None,
        slug: slug.to_string(),
        title: "Gammu 1.0".to_string(),
        body: "Released.".to_string(),
        excerpt: None,
        category_ids: Vec::new(),
    }
}
