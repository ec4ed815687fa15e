use axum::response::Html;

/// Serves the embedded upload form.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}
