//! Error kinds of the proxy endpoint and their JSON envelopes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::backend::BackendError;
use crate::models::ErrorEnvelope;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Inbound payload failed decoding or required-field checks.
    #[error("{0}")]
    Validation(String),

    /// Backend answered with a non-2xx status; `body` is its raw text.
    #[error("backend returned {status}: {body}")]
    Backend { status: StatusCode, body: String },

    #[error("{0}")]
    UpstreamTimeout(String),

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Backend { status, .. } => *status,
            ApiError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// One-line description for logs; never includes the backend body.
    pub fn summary(&self) -> String {
        match self {
            ApiError::Backend { status, .. } => format!("backend returned {status}"),
            other => other.to_string(),
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let (error, details) = match self {
            ApiError::Validation(details) => ("Validation error", details.clone()),
            ApiError::Backend { body, .. } => ("Backend error", body.clone()),
            ApiError::UpstreamTimeout(details) => ("Upstream timeout", details.clone()),
            ApiError::Unexpected(details) => ("Unexpected error", details.clone()),
        };
        ErrorEnvelope { error: error.to_string(), details }
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Status { status, body } => ApiError::Backend { status, body },
            err @ BackendError::Timeout { .. } => ApiError::UpstreamTimeout(err.to_string()),
            err => ApiError::Unexpected(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.envelope())).into_response()
    }
}
