use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Pagination metadata attached to every paginated listing.
///
/// `start_index` and `end_index` are 1-based positions of the first and last item on the
/// page, both 0 when the listing is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub per_page: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub start_index: u64,
    pub end_index: u64,
}
