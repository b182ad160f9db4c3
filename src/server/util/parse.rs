use url::form_urlencoded;

use crate::server::model::phonedb::SearchPhonesParam;

/// Parses a raw query string into search parameters.
///
/// `feature` may repeat and keeps every value in order. For `q` and `page` the last
/// occurrence wins. An empty `q` is kept as `Some("")` so it still appears in pagination
/// links.
///
/// # Arguments
/// - `raw` - Query string without the leading `?`, if any
///
/// # Returns
/// - `SearchPhonesParam` - Decoded parameters; unknown keys are ignored
pub fn parse_search_query(raw: Option<&str>) -> SearchPhonesParam {
    let mut params = SearchPhonesParam::default();

    let Some(raw) = raw else {
        return params;
    };

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "q" => params.query = Some(value.into_owned()),
            "feature" => params.features.push(value.into_owned()),
            "page" => params.page = Some(value.into_owned()),
            _ => {}
        }
    }

    params
}

/// Extracts the raw `page` value from a query string
pub fn parse_page(raw: Option<&str>) -> Option<String> {
    parse_search_query(raw).page
}
