use super::*;
use crate::util::upload::UNSUPPORTED_FILE_MESSAGE;

struct FakeFile(&'static str, &'static str);

impl UploadMeta for FakeFile {
    fn file_name(&self) -> String {
        self.0.to_owned()
    }

    fn mime_type(&self) -> String {
        self.1.to_owned()
    }
}

const PNG: FakeFile = FakeFile("bill.png", "image/png");

fn validated(credits: u32) -> SessionState {
    SessionState { api_key: "key-1".into(), credits: Some(credits), ..SessionState::default() }
}

// =============================================================
// Defaults / key entry
// =============================================================

#[test]
fn session_default_is_idle_and_empty() {
    let state = SessionState::default();
    assert!(state.api_key.is_empty());
    assert_eq!(state.credits, None);
    assert!(!state.is_loading);
    assert!(!state.is_validating);
    assert_eq!(state.error, None);
    assert_eq!(state.parsed, None);
    assert!(!state.can_upload());
    assert!(!state.can_validate());
}

#[test]
fn set_api_key_resets_credits_and_error() {
    let mut state = validated(3);
    state.error = Some("old".into());
    state.set_api_key("key-2".into());
    assert_eq!(state.api_key, "key-2");
    assert_eq!(state.credits, None);
    assert_eq!(state.error, None);
    assert!(!state.can_upload());
}

#[test]
fn set_api_key_same_value_keeps_credits() {
    let mut state = validated(3);
    state.set_api_key("key-1".into());
    assert_eq!(state.credits, Some(3));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn begin_validation_without_key_sets_error() {
    let mut state = SessionState::default();
    assert_eq!(state.begin_validation(), None);
    assert_eq!(state.error.as_deref(), Some("API key is required"));
    assert!(!state.is_validating);

    state.set_api_key("   ".into());
    assert_eq!(state.begin_validation(), None);
    assert_eq!(state.error.as_deref(), Some(API_KEY_REQUIRED_MESSAGE));
}

#[test]
fn begin_validation_marks_in_flight_and_trims() {
    let mut state = SessionState::default();
    state.set_api_key("  key-1 ".into());
    assert_eq!(state.begin_validation().as_deref(), Some("key-1"));
    assert!(state.is_validating);
    assert!(!state.can_validate());
    assert_eq!(state.begin_validation(), None);
}

#[test]
fn finish_validation_success_enables_upload() {
    let mut state = SessionState::default();
    state.set_api_key("key-1".into());
    let key = state.begin_validation().unwrap();
    state.finish_validation(&key, Ok(3));
    assert_eq!(state.credits, Some(3));
    assert!(!state.is_validating);
    assert!(state.can_upload());
}

#[test]
fn finish_validation_failure_clears_key_and_credits() {
    let mut state = SessionState::default();
    state.set_api_key("bad".into());
    let key = state.begin_validation().unwrap();
    state.finish_validation(&key, Err("Invalid API key".into()));
    assert!(state.api_key.is_empty());
    assert_eq!(state.credits, None);
    assert_eq!(state.error.as_deref(), Some("Invalid API key"));
    assert!(!state.can_upload());
}

#[test]
fn finish_validation_for_replaced_key_is_dropped() {
    let mut state = SessionState::default();
    state.set_api_key("old".into());
    let key = state.begin_validation().unwrap();
    state.set_api_key("new".into());
    state.finish_validation(&key, Ok(5));
    assert_eq!(state.api_key, "new");
    assert_eq!(state.credits, None);
    assert!(!state.is_validating);
}

// =============================================================
// Upload
// =============================================================

#[test]
fn begin_upload_without_key_is_refused() {
    let mut state = SessionState::default();
    assert_eq!(state.begin_upload(&PNG), None);
    assert_eq!(state.error.as_deref(), Some("API key is required"));
    assert!(!state.is_loading);
}

#[test]
fn begin_upload_without_credits_is_refused() {
    let mut state = SessionState::default();
    state.set_api_key("key-1".into());
    assert_eq!(state.begin_upload(&PNG), None);
    assert_eq!(state.error.as_deref(), Some(VALIDATE_FIRST_MESSAGE));
    assert!(!state.is_loading);
}

#[test]
fn begin_upload_rejects_unsupported_file() {
    let mut state = validated(2);
    assert_eq!(state.begin_upload(&FakeFile("bill.gif", "image/gif")), None);
    assert_eq!(state.error.as_deref(), Some(UNSUPPORTED_FILE_MESSAGE));
}

#[test]
fn begin_upload_clears_previous_result_and_error() {
    let mut state = validated(2);
    state.parsed = Some(ParsedResult::Text("old".into()));
    state.error = Some("old error".into());
    assert_eq!(state.begin_upload(&PNG).as_deref(), Some("key-1"));
    assert!(state.is_loading);
    assert_eq!(state.parsed, None);
    assert_eq!(state.error, None);
    assert!(!state.can_upload());
}

#[test]
fn begin_upload_while_loading_is_ignored() {
    let mut state = validated(2);
    state.begin_upload(&PNG).unwrap();
    assert_eq!(state.begin_upload(&PNG), None);
    assert_eq!(state.error, None);
}

#[test]
fn finish_upload_success_decrements_credits_once() {
    let mut state = validated(3);
    state.begin_upload(&PNG).unwrap();
    let result = ParsedResult::Json(serde_json::json!({ "grand_total": 10 }));
    state.finish_upload(Ok(result.clone()));
    assert_eq!(state.credits, Some(2));
    assert_eq!(state.parsed, Some(result));
    assert!(!state.is_loading);
}

#[test]
fn finish_upload_success_at_zero_saturates() {
    let mut state = validated(0);
    state.begin_upload(&PNG).unwrap();
    state.finish_upload(Ok(ParsedResult::Text("x".into())));
    assert_eq!(state.credits, Some(0));
}

#[test]
fn finish_upload_failure_keeps_credits() {
    let mut state = validated(3);
    state.begin_upload(&PNG).unwrap();
    state.finish_upload(Err("Failed to parse bill".into()));
    assert_eq!(state.credits, Some(3));
    assert_eq!(state.error.as_deref(), Some("Failed to parse bill"));
    assert_eq!(state.parsed, None);
    assert!(!state.is_loading);
}
