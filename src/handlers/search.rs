use crate::models::SearchQuery;
use crate::routes;
use axum::{extract::Query, response::Html};

/// GET /search handler - Echo the search term inside an HTML heading
///
/// The q parameter is wrapped in the heading template without escaping and
/// returned as text/html. This passthrough is the behavior scanners are
/// expected to flag (reflected XSS).
#[utoipa::path(
    get,
    path = routes::SEARCH,
    params(
        ("q" = String, Query, description = "Search term, echoed into the markup unmodified")
    ),
    responses(
        (status = 200, description = "HTML fragment containing the search term", body = String, content_type = "text/html"),
        (status = 400, description = "Missing q parameter")
    ),
    tag = "fixture"
)]
pub async fn search_handler(Query(query): Query<SearchQuery>) -> Html<String> {
    tracing::info!("Rendering search results for: {}", query.q);

    Html(format!("<h1>Search results for: {}</h1>", query.q))
}
