// ABOUTME: Integration tests for the REST client against an in-process backend
// ABOUTME: Covers decoding, error statuses, invalid bodies, and POST actions

mod common;

use common::{approval, Backend};
use sitepulse::types::ApprovalStatus;
use sitepulse::ApiClient;

#[tokio::test]
async fn test_get_decodes_typed_payload() {
    let base = Backend::default().spawn().await;
    let client = ApiClient::new(&base);

    let risks = client.risks().await.unwrap();

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].id, "risk-1");
    assert!(risks[0].risk_score.safety_critical);
    assert!(risks[0].data_sources.is_empty());
    assert_eq!(risks[0].updated_at, None);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_ignored() {
    let base = Backend::default().spawn().await;
    let client = ApiClient::new(&format!("{}/", base));

    assert_eq!(client.base_url(), base);
    assert!(client.risks().await.is_ok());
}

#[tokio::test]
async fn test_error_status_is_reported_with_code() {
    let base = Backend::default().spawn().await;
    let client = ApiClient::new(&base);

    let err = client.safety_metrics().await.unwrap_err();
    assert_eq!(err.to_string(), "API error: 503");
}

#[tokio::test]
async fn test_missing_route_is_an_api_error() {
    let base = Backend::default().spawn().await;
    let client = ApiClient::new(&base);

    let err = client.permits().await.unwrap_err();
    assert_eq!(err.to_string(), "API error: 404");
}

#[tokio::test]
async fn test_invalid_json_body_is_an_error() {
    let base = Backend::default().spawn().await;
    let client = ApiClient::new(&base);

    let err = client.budget().await.unwrap_err();
    assert!(err.to_string().contains("Invalid JSON from /api/financial/budget"));
}

#[tokio::test]
async fn test_unreachable_backend_is_an_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr));
    assert!(client.approvals().await.is_err());
}

#[tokio::test]
async fn test_approve_posts_notes_and_returns_updated_request() {
    let backend = Backend::with_approvals(vec![approval("apr-1", "Resequence level 4")]);
    let base = backend.clone().spawn().await;
    let client = ApiClient::new(&base);

    let updated = client.approve("apr-1", "ok with the crane swap").await.unwrap();

    assert_eq!(updated.status, ApprovalStatus::Approved);
    assert_eq!(updated.pm_notes.as_deref(), Some("ok with the crane swap"));
    assert_eq!(
        backend.approvals.lock().unwrap()[0].status,
        ApprovalStatus::Approved
    );
}

#[tokio::test]
async fn test_reject_unknown_request_fails() {
    let base = Backend::default().spawn().await;
    let client = ApiClient::new(&base);

    let err = client.reject("nope", "").await.unwrap_err();
    assert_eq!(err.to_string(), "API error: 404");
}

#[tokio::test]
async fn test_trigger_agent_ignores_response_body() {
    let backend = Backend::default();
    let base = backend.clone().spawn().await;
    let client = ApiClient::new(&base);

    client.trigger_agent("risk_forecaster").await.unwrap();

    assert_eq!(
        *backend.triggered.lock().unwrap(),
        vec!["risk_forecaster".to_string()]
    );
}
