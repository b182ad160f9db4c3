pub use super::feature::Entity as Feature;
pub use super::news_category::Entity as NewsCategory;
pub use super::news_entry::Entity as NewsEntry;
pub use super::news_entry_category::Entity as NewsEntryCategory;
pub use super::phone::Entity as Phone;
pub use super::phone_feature::Entity as PhoneFeature;
pub use super::user::Entity as User;
pub use super::vendor::Entity as Vendor;
