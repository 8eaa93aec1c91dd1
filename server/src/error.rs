//! Proxy error type and its `{detail}` JSON response shape.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the browser can see is rendered as `{"detail": "..."}` with
//! a status code, matching what the backend itself returns. Upstream errors
//! keep the upstream status; local failures map to 4xx/5xx below.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::backend::BackendError;

pub const MISSING_API_KEY_DETAIL: &str = "API key is required";
pub const MISSING_FILE_DETAIL: &str = "File is required";
pub const UNEXPECTED_DETAIL: &str = "An unexpected error occurred";

/// Errors surfaced by the proxy handlers.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The `X-API-Key` header was absent or blank.
    #[error("API key is required")]
    MissingApiKey,

    /// The multipart body had no `file` field.
    #[error("file field is required")]
    MissingFile,

    /// The multipart body could not be read. Keeps the extractor's status,
    /// so an oversized upload stays 413.
    #[error("invalid multipart body ({status}): {detail}")]
    InvalidMultipart { status: StatusCode, detail: String },

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    /// Talking to the backend failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Wire shape for every error body.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingApiKey => StatusCode::UNAUTHORIZED,
            Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::InvalidMultipart { status, .. } => *status,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the browser. Backend failures stay generic.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::MissingApiKey => MISSING_API_KEY_DETAIL.to_owned(),
            Self::MissingFile => MISSING_FILE_DETAIL.to_owned(),
            Self::InvalidMultipart { detail, .. } => detail.clone(),
            Self::Upstream { detail, .. } => detail.clone(),
            Self::Backend(_) => UNEXPECTED_DETAIL.to_owned(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        if let Self::Backend(e) = &self {
            tracing::error!(error = %e, "error proxying request");
        }
        (self.status(), Json(ErrorDetail { detail: self.detail() })).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
