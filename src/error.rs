//! Error taxonomy for the upload pipeline.
//!
//! Three kinds of failure reach the client: malformed input (400), a failing
//! image-extraction provider (500), and a rejected or failing catalog call
//! (500). Auth failures are deliberately not distinguished from other catalog
//! failures in the response body; the client gets a single generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the upload pipeline.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed client input: unknown inputType or missing image part.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The catalog provider rejected the stored access token.
    #[error("catalog authentication failed: {0}")]
    Auth(String),

    /// The image-to-text provider failed or answered with a non-success status.
    #[error("extraction provider error: {0}")]
    Extraction(String),

    /// Any other catalog API rejection: network error, non-success status, or
    /// a response body that does not match the expected schema.
    #[error("catalog provider error: {0}")]
    Catalog(String),
}

impl ApiError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) | ApiError::Extraction(_) | ApiError::Catalog(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}
