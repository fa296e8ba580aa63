use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::usecases::global_link::LinkError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("The file is larger than this server accepts.")]
    PayloadTooLarge,

    #[error("Failed to generate link: {0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<LinkError> for AppError {
    fn from(error: LinkError) -> Self {
        match error {
            LinkError::MissingFile => AppError::BadRequest(error.to_string()),
            LinkError::Upstream(upstream) => AppError::Upstream(upstream.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let AppError::Internal(err) = &self {
            error!(error = ?err, "http: internal error");
        }

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::value_objects::upstream::{UpstreamEndpoint, UpstreamError};

    #[test]
    fn upstream_error_message_keeps_raw_detail() {
        let error = AppError::from(LinkError::Upstream(UpstreamError::Rejected {
            endpoint: UpstreamEndpoint::Upload,
            body: r#"{"status":"error"}"#.to_string(),
        }));

        assert_eq!(
            error.to_string(),
            r#"Failed to generate link: upload failed: {"status":"error"}"#
        );
        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_file_is_bad_request() {
        let error = AppError::from(LinkError::MissingFile);

        assert_eq!(error.to_string(), "Please upload a file first.");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_hides_detail() {
        let error = AppError::from(anyhow::anyhow!("database password leaked"));

        assert_eq!(error.to_string(), "Internal server error");
    }
}
