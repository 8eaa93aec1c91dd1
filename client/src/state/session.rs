//! Page session state: API key, credits, in-flight flags, error and result.
//!
//! DESIGN
//! ======
//! One `SessionState` lives in a `RwSignal` provided at the app root. All
//! transitions are synchronous methods here so they can be tested without a
//! browser; `actions` wraps them around the network calls.
//!
//! Per action the flow is Idle → in flight → Success | Failure → Idle. A
//! `begin_*` method either refuses (recording why in `error`) or marks the
//! call in flight and returns the key to send. The matching `finish_*`
//! applies the outcome.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::ParsedResult;
use crate::util::upload::{UploadMeta, check_upload};

pub const API_KEY_REQUIRED_MESSAGE: &str = "API key is required";
pub const VALIDATE_FIRST_MESSAGE: &str = "Please validate your API key first";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub api_key: String,
    /// Remaining credits. `None` until the current key has been validated.
    pub credits: Option<u32>,
    /// A parse call is in flight.
    pub is_loading: bool,
    /// A validate-key call is in flight.
    pub is_validating: bool,
    pub error: Option<String>,
    pub parsed: Option<ParsedResult>,
}

impl SessionState {
    /// Replace the key as the user types. A new key is unvalidated.
    pub fn set_api_key(&mut self, key: String) {
        if key != self.api_key {
            self.credits = None;
        }
        self.api_key = key;
        self.error = None;
    }

    /// Whether the Validate button should be enabled.
    pub fn can_validate(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.is_validating
    }

    /// Whether the upload control should be enabled.
    pub fn can_upload(&self) -> bool {
        !self.api_key.is_empty() && self.credits.is_some() && !self.is_loading
    }

    /// Start validating the current key. Returns the key to send, or `None`
    /// when no call should be made.
    pub fn begin_validation(&mut self) -> Option<String> {
        if self.is_validating {
            return None;
        }
        let key = self.api_key.trim();
        if key.is_empty() {
            self.error = Some(API_KEY_REQUIRED_MESSAGE.to_owned());
            return None;
        }
        let key = key.to_owned();
        self.is_validating = true;
        self.error = None;
        Some(key)
    }

    /// Apply a validate-key outcome for `key`.
    ///
    /// A result for a key the user has since replaced is dropped. A rejected
    /// key clears both the key and the credits.
    pub fn finish_validation(&mut self, key: &str, outcome: Result<u32, String>) {
        self.is_validating = false;
        if self.api_key.trim() != key {
            return;
        }
        match outcome {
            Ok(credits) => {
                self.api_key = key.to_owned();
                self.credits = Some(credits);
                self.error = None;
            }
            Err(message) => {
                self.api_key.clear();
                self.credits = None;
                self.error = Some(message);
            }
        }
    }

    /// Start uploading `file`. Returns the key to send, or `None` when the
    /// upload is refused locally or another one is already running.
    pub fn begin_upload(&mut self, file: &impl UploadMeta) -> Option<String> {
        if self.is_loading {
            return None;
        }
        if self.api_key.is_empty() {
            self.error = Some(API_KEY_REQUIRED_MESSAGE.to_owned());
            return None;
        }
        if self.credits.is_none() {
            self.error = Some(VALIDATE_FIRST_MESSAGE.to_owned());
            return None;
        }
        if let Err(message) = check_upload(file) {
            self.error = Some(message);
            return None;
        }
        self.is_loading = true;
        self.error = None;
        self.parsed = None;
        Some(self.api_key.clone())
    }

    /// Apply a parse outcome. Success spends one credit locally.
    pub fn finish_upload(&mut self, outcome: Result<ParsedResult, String>) {
        self.is_loading = false;
        match outcome {
            Ok(result) => {
                self.parsed = Some(result);
                self.credits = self.credits.map(|c| c.saturating_sub(1));
            }
            Err(message) => self.error = Some(message),
        }
    }
}
