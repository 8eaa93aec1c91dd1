//! `reqwest` client for the bill-parsing backend.
//!
//! Thin HTTP wrapper for `/validate-key` and `/parse_bill`. Pure body parsing
//! in `parse_body` for testability.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use reqwest::multipart::{Form, Part};

use super::{API_KEY_HEADER, BackendError, BackendReply, BillBackend, BillUpload};
use crate::config::BackendTimeouts;

const VALIDATE_KEY_PATH: &str = "validate-key";
const PARSE_BILL_PATH: &str = "parse_bill";

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a backend client rooted at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: String, timeouts: BackendTimeouts) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

#[async_trait::async_trait]
impl BillBackend for HttpBackend {
    async fn validate_key(&self, api_key: &str) -> Result<BackendReply, BackendError> {
        let response = self
            .http
            .get(self.endpoint(VALIDATE_KEY_PATH))
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        read_reply(response).await
    }

    async fn parse_bill(&self, api_key: &str, upload: BillUpload) -> Result<BackendReply, BackendError> {
        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| BackendError::Request(e.to_string()))?;
        }
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint(PARSE_BILL_PATH))
            .header(API_KEY_HEADER, api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        read_reply(response).await
    }
}

// =============================================================================
// PARSING
// =============================================================================

async fn read_reply(response: reqwest::Response) -> Result<BackendReply, BackendError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| BackendError::Request(e.to_string()))?;

    Ok(BackendReply { status, body: parse_body(&text)? })
}

fn parse_body(text: &str) -> Result<serde_json::Value, BackendError> {
    serde_json::from_str(text).map_err(|e| BackendError::Parse(e.to_string()))
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
