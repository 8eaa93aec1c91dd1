//! User-triggered flows: validate the key, upload a bill.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these from `spawn_local`. Each flow reads the session,
//! makes at most one network call through `BillApi`, and writes the outcome
//! back. The session is never borrowed across an await.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;

use super::session::SessionState;
use crate::net::types::ParsedResult;
use crate::util::upload::UploadMeta;

/// The two proxy calls the page makes. `ProxyApi` is the browser
/// implementation; tests use a mock.
#[allow(async_fn_in_trait)]
pub trait BillApi {
    /// The file handle being uploaded.
    type Upload: UploadMeta;

    /// Return the remaining credits for `api_key`.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the key is rejected or the call fails.
    async fn validate_key(&self, api_key: &str) -> Result<u32, String>;

    /// Send `file` for parsing.
    ///
    /// # Errors
    ///
    /// Returns the message to show when parsing fails.
    async fn parse_bill(&self, api_key: &str, file: &Self::Upload) -> Result<ParsedResult, String>;
}

/// Somewhere a `SessionState` can be updated in place.
pub trait SessionStore {
    /// Run `f` against the session. `None` if the session is gone
    /// (e.g. the owning component was disposed).
    fn update_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R>;
}

impl SessionStore for RwSignal<SessionState> {
    fn update_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl SessionStore for std::cell::RefCell<SessionState> {
    fn update_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Validate the session's key and store the remaining credits.
pub async fn validate_key<A: BillApi>(api: &A, session: &impl SessionStore) {
    let Some(Some(key)) = session.update_session(SessionState::begin_validation) else {
        return;
    };
    let outcome = api.validate_key(&key).await;
    session.update_session(|s| s.finish_validation(&key, outcome));
}

/// Upload `file` and store the parsed result.
pub async fn upload_bill<A: BillApi>(api: &A, session: &impl SessionStore, file: &A::Upload) {
    let Some(Some(key)) = session.update_session(|s| s.begin_upload(file)) else {
        return;
    };
    let outcome = api.parse_bill(&key, file).await;
    session.update_session(|s| s.finish_upload(outcome));
}
