use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use tracing::debug;

pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    debug!(%method, path = %uri.path(), "router: no route matched");
    (StatusCode::NOT_FOUND, "NOT_FOUND")
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
