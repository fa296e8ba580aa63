use axum::response::Html;

pub async fn serve_page() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}
