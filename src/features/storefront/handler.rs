use axum::http::StatusCode;
use axum::response::Html;

pub const MISSING_IMAGE_MESSAGE: &str =
    "There is no image. Kindly double check the URL you are using.";

const INDEX_HTML: &str = r#"<a href="/orders">Orders</a>
<a href="/lessons">Lessons</a>"#;

pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fallback for anything under `/images` the static file service cannot find.
pub async fn handle_missing_image() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, MISSING_IMAGE_MESSAGE)
}
