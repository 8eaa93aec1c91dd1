//! Bill-parsing backend: the upstream service behind the proxy.
//!
//! DESIGN
//! ======
//! Handlers talk to the backend through the `BillBackend` trait so route tests
//! can swap in a mock. `HttpBackend` is the real implementation: a thin
//! `reqwest` wrapper over `/validate-key` and `/parse_bill`.

pub mod http;

pub use http::HttpBackend;

/// Header carrying the caller's API key, both inbound and upstream.
pub const API_KEY_HEADER: &str = "X-API-Key";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend replied with a body that is not JSON.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TYPES
// =============================================================================

/// Status and decoded JSON body of a backend response, success or not.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl BackendReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The backend's `detail` message, if it sent a string one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.body
            .get("detail")
            .and_then(serde_json::Value::as_str)
            .filter(|d| !d.is_empty())
    }
}

/// A single uploaded image, buffered in memory for forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Async interface to the parsing backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait BillBackend: Send + Sync {
    /// Ask the backend how many credits remain for `api_key`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or a non-JSON body.
    /// Non-2xx statuses are not errors; they come back in the reply.
    async fn validate_key(&self, api_key: &str) -> Result<BackendReply, BackendError>;

    /// Forward an image to the backend for parsing.
    ///
    /// # Errors
    ///
    /// Same contract as [`BillBackend::validate_key`].
    async fn parse_bill(&self, api_key: &str, upload: BillUpload) -> Result<BackendReply, BackendError>;
}
