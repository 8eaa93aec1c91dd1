//! REST helpers for the proxy endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, exposed through
//! `ProxyApi`, the browser implementation of `BillApi`.
//! Server-side (SSR): nothing to call; the page only renders its idle state.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is flattened into the user-facing string the page shows
//! inline. The proxy's `{detail}` wins when present; otherwise a fixed
//! fallback per endpoint is used.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorDetail;

/// Header carrying the user's API key.
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const VALIDATE_KEY_ENDPOINT: &str = "/api/proxy/validate-key";
pub const PARSE_BILL_ENDPOINT: &str = "/api/proxy/parse_bill";

pub const INVALID_KEY_MESSAGE: &str = "Invalid API key";
pub const VALIDATE_FAILED_MESSAGE: &str = "Failed to validate API key";
pub const PARSE_FAILED_MESSAGE: &str = "Failed to parse bill";

/// How a proxy call failed, before it becomes a user-facing message.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug)]
pub(crate) enum CallFailure<'a> {
    /// The request never produced a response.
    Transport,
    /// Non-2xx response, with its `{detail}` body if it parsed.
    Rejected(Option<&'a ErrorDetail>),
    /// 2xx response whose body did not decode.
    Malformed,
}

/// Message for a failed validate-key call.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn validation_failure_message(failure: CallFailure<'_>) -> String {
    match failure {
        CallFailure::Rejected(body) => body.and_then(ErrorDetail::message).unwrap_or(INVALID_KEY_MESSAGE),
        CallFailure::Transport | CallFailure::Malformed => VALIDATE_FAILED_MESSAGE,
    }
    .to_owned()
}

/// Message for a failed parse_bill call. Only a backend `detail` is shown
/// verbatim; transport errors never leak through.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_failure_message(failure: CallFailure<'_>) -> String {
    match failure {
        CallFailure::Rejected(body) => body.and_then(ErrorDetail::message).unwrap_or(PARSE_FAILED_MESSAGE),
        CallFailure::Transport | CallFailure::Malformed => PARSE_FAILED_MESSAGE,
    }
    .to_owned()
}

/// Browser client for the proxy endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProxyApi;

#[cfg(feature = "hydrate")]
impl crate::state::actions::BillApi for ProxyApi {
    type Upload = web_sys::File;

    async fn validate_key(&self, api_key: &str) -> Result<u32, String> {
        use super::types::ValidateKeyResponse;

        let resp = gloo_net::http::Request::get(VALIDATE_KEY_ENDPOINT)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| {
                log::warn!("validate-key request failed: {e}");
                validation_failure_message(CallFailure::Transport)
            })?;

        if !resp.ok() {
            let body = resp.json::<ErrorDetail>().await.ok();
            log::info!("validate-key rejected with status {}", resp.status());
            return Err(validation_failure_message(CallFailure::Rejected(body.as_ref())));
        }

        let body: ValidateKeyResponse = resp.json().await.map_err(|e| {
            log::warn!("validate-key response malformed: {e}");
            validation_failure_message(CallFailure::Malformed)
        })?;
        Ok(body.remaining_credits)
    }

    async fn parse_bill(&self, api_key: &str, file: &Self::Upload) -> Result<super::types::ParsedResult, String> {
        use super::types::ParsedResult;

        let transport = |what: &str, e: &dyn std::fmt::Display| {
            log::warn!("parse_bill {what} failed: {e}");
            parse_failure_message(CallFailure::Transport)
        };

        let form = web_sys::FormData::new().map_err(|e| transport("form setup", &format!("{e:?}")))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| transport("form setup", &format!("{e:?}")))?;

        let resp = gloo_net::http::Request::post(PARSE_BILL_ENDPOINT)
            .header(API_KEY_HEADER, api_key)
            .body(form)
            .map_err(|e| transport("request build", &e))?
            .send()
            .await
            .map_err(|e| transport("request", &e))?;

        if !resp.ok() {
            let body = resp.json::<ErrorDetail>().await.ok();
            log::info!("parse_bill rejected with status {}", resp.status());
            return Err(parse_failure_message(CallFailure::Rejected(body.as_ref())));
        }

        let body: serde_json::Value = resp.json().await.map_err(|e| {
            log::warn!("parse_bill response malformed: {e}");
            parse_failure_message(CallFailure::Malformed)
        })?;
        Ok(ParsedResult::from_response(body))
    }
}
