//! SeaORM entities for the news and phonedb sections.

pub mod prelude;

pub mod feature;
pub mod news_category;
pub mod news_entry;
pub mod news_entry_category;
pub mod phone;
pub mod phone_feature;
pub mod user;
pub mod vendor;
