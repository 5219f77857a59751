use axum::response::Html;

/// The upload form, embedded at compile time so the binary carries no
/// runtime asset directory.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
