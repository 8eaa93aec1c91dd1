//! Proxy routes: forward browser calls to the bill-parsing backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the backend directly. These two handlers lift
//! the `X-API-Key` header off the incoming request, repeat the call upstream,
//! and hand the backend's JSON back unchanged on success. Failures become a
//! `{detail}` body carrying the upstream status (see `crate::error`).

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use crate::backend::{API_KEY_HEADER, BackendReply, BillUpload};
use crate::error::ProxyError;
use crate::state::AppState;

pub const INVALID_KEY_DETAIL: &str = "Invalid API key";
pub const PARSE_FAILED_DETAIL: &str = "Failed to parse bill";

const FILE_FIELD: &str = "file";
const DEFAULT_FILE_NAME: &str = "upload";

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/proxy/validate-key`: return remaining credits for the caller's key.
pub async fn validate_key(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let api_key = api_key_from_headers(&headers)?;
    let reply = state.backend.validate_key(api_key).await?;
    forward_reply(reply, INVALID_KEY_DETAIL)
}

/// `POST /api/proxy/parse_bill`: forward the `file` field for parsing.
///
/// The key is checked before the body is read, so a keyless request is
/// rejected without touching the multipart stream or the backend.
pub async fn parse_bill(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let api_key = api_key_from_headers(&headers)?;
    let mut multipart = multipart.map_err(|e| ProxyError::InvalidMultipart {
        status: e.status(),
        detail: e.body_text(),
    })?;
    let upload = read_upload(&mut multipart).await?;

    tracing::info!(
        file_name = %upload.file_name,
        content_type = upload.content_type.as_deref().unwrap_or("-"),
        bytes = upload.bytes.len(),
        "forwarding bill for parsing"
    );

    let reply = state.backend.parse_bill(api_key, upload).await?;
    forward_reply(reply, PARSE_FAILED_DETAIL)
}

// =============================================================================
// HELPERS
// =============================================================================

/// Extract a non-blank API key from the request headers.
pub(crate) fn api_key_from_headers(headers: &HeaderMap) -> Result<&str, ProxyError> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(ProxyError::MissingApiKey)
}

/// Pass a 2xx body through verbatim; otherwise surface the backend's detail.
pub(crate) fn forward_reply(reply: BackendReply, fallback: &str) -> Result<Json<serde_json::Value>, ProxyError> {
    if reply.is_success() {
        return Ok(Json(reply.body));
    }

    let detail = reply.detail().unwrap_or(fallback).to_owned();
    tracing::warn!(status = reply.status, %detail, "backend rejected request");
    Err(ProxyError::Upstream { status: reply.status, detail })
}

async fn read_upload(multipart: &mut Multipart) -> Result<BillUpload, ProxyError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        return Ok(BillUpload { file_name, content_type, bytes: bytes.to_vec() });
    }

    Err(ProxyError::MissingFile)
}

fn multipart_error(e: MultipartError) -> ProxyError {
    ProxyError::InvalidMultipart { status: e.status(), detail: e.body_text() }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
