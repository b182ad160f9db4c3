use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{news, phonedb},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Wammu Web", description = "News and phone database backend"),
    tags(
        (name = "news", description = "News categories and entries"),
        (name = "phonedb", description = "Phone database search and statistics")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(news::get_categories))
        .routes(routes!(news::get_category))
        .routes(routes!(news::get_entries))
        .routes(routes!(news::get_latest_entry))
        .routes(routes!(news::get_entry))
        .routes(routes!(phonedb::get_index))
        .routes(routes!(phonedb::search))
        .routes(routes!(phonedb::search_by_feature))
        .routes(routes!(phonedb::get_vendor))
        .routes(routes!(phonedb::get_phone))
        .routes(routes!(phonedb::get_chart))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
