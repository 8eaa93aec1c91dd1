//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the backend client and nothing else: the proxy keeps no
//! per-user or per-session data.

use std::sync::Arc;

use crate::backend::BillBackend;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BillBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn BillBackend>) -> Self {
        Self { backend }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::backend::{BackendError, BackendReply, BillUpload};

    /// A call the mock backend received.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum BackendCall {
        ValidateKey { api_key: String },
        ParseBill { api_key: String, upload: BillUpload },
    }

    /// Backend that replays canned replies and records every call.
    pub struct MockBackend {
        replies: Mutex<Vec<Result<BackendReply, BackendError>>>,
        pub calls: Mutex<Vec<BackendCall>>,
    }

    impl MockBackend {
        #[must_use]
        pub fn new(replies: Vec<Result<BackendReply, BackendError>>) -> Self {
            Self { replies: Mutex::new(replies), calls: Mutex::new(Vec::new()) }
        }

        #[must_use]
        pub fn replying(status: u16, body: serde_json::Value) -> Self {
            Self::new(vec![Ok(BackendReply { status, body })])
        }

        #[must_use]
        pub fn failing(err: BackendError) -> Self {
            Self::new(vec![Err(err)])
        }

        pub fn recorded(&self) -> Vec<BackendCall> {
            self.calls.lock().unwrap().clone()
        }

        fn next_reply(&self) -> Result<BackendReply, BackendError> {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                Ok(BackendReply { status: 500, body: serde_json::json!({ "detail": "no canned reply" }) })
            } else {
                replies.remove(0)
            }
        }
    }

    #[async_trait::async_trait]
    impl BillBackend for MockBackend {
        async fn validate_key(&self, api_key: &str) -> Result<BackendReply, BackendError> {
            self.calls
                .lock()
                .unwrap()
                .push(BackendCall::ValidateKey { api_key: api_key.to_owned() });
            self.next_reply()
        }

        async fn parse_bill(&self, api_key: &str, upload: BillUpload) -> Result<BackendReply, BackendError> {
            self.calls
                .lock()
                .unwrap()
                .push(BackendCall::ParseBill { api_key: api_key.to_owned(), upload });
            self.next_reply()
        }
    }

    /// Create a test `AppState` around a mock backend.
    #[must_use]
    pub fn test_app_state(backend: Arc<MockBackend>) -> AppState {
        AppState::new(backend)
    }
}
