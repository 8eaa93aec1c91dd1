use super::*;

#[test]
fn missing_api_key_is_unauthorized() {
    let err = ProxyError::MissingApiKey;
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(err.detail(), "API key is required");
}

#[test]
fn missing_file_is_bad_request() {
    let err = ProxyError::MissingFile;
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.detail(), MISSING_FILE_DETAIL);
}

#[test]
fn invalid_multipart_keeps_extractor_status() {
    let err = ProxyError::InvalidMultipart {
        status: StatusCode::PAYLOAD_TOO_LARGE,
        detail: "Request payload is too large".into(),
    };
    assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(err.detail(), "Request payload is too large");
}

#[test]
fn upstream_keeps_status_and_detail() {
    let err = ProxyError::Upstream { status: 403, detail: "Invalid API key".into() };
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(err.detail(), "Invalid API key");
}

#[test]
fn upstream_invalid_status_maps_to_bad_gateway() {
    let err = ProxyError::Upstream { status: 42, detail: "weird".into() };
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn backend_failures_hide_internal_message() {
    let err = ProxyError::from(BackendError::Request("connection refused".into()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.detail(), UNEXPECTED_DETAIL);

    let err = ProxyError::from(BackendError::Parse("expected value".into()));
    assert_eq!(err.detail(), UNEXPECTED_DETAIL);
}

#[tokio::test]
async fn into_response_renders_detail_json() {
    let response = ProxyError::MissingApiKey.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "detail": "API key is required" }));
}
