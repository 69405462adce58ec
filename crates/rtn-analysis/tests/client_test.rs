//! Contract tests for AnalysisClient against a mocked chat-completions API.
//!
//! ## Cases
//!
//! | Response | Expected |
//! |----------|----------|
//! | 200 with analysis JSON | `Ok(DocumentAnalysis)` |
//! | 200 with fenced JSON | `Ok(DocumentAnalysis)` |
//! | 200 with prose content | `MalformedResponse`, fallback used by `analyze_or_fallback` |
//! | 401 with error envelope | `Api { status: 401 }`, no fallback |
//! | connection refused | `Network`, no fallback |

use rtn_analysis::{
    analyze_or_fallback, AnalysisClient, AnalysisConfig, AnalysisError, AnalysisSource, RiskLevel,
};
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCUMENT: &str = "Mobile food vendors must hold a permit. Vendors shall display the permit. \
    Trading is required to stop by 10pm.";

fn client_for(server: &MockServer) -> AnalysisClient {
    let config = AnalysisConfig::new("test-key")
        .unwrap()
        .with_base_url(&server.uri())
        .unwrap()
        .with_model("test-model")
        .with_timeout_secs(5);
    AnalysisClient::new(config).unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

const ANALYSIS: &str = r#"{"summary":"Vendor permit conditions.","requirements":["Hold a permit","Display the permit"],"documentType":"Permit","riskLevel":"medium","actionItems":["Apply for a permit"]}"#;

// ── Success ─────────────────────────────────────────────────────────

#[tokio::test]
async fn analyze_sends_model_auth_and_document() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(bearer_token("test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "temperature": 0.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(ANALYSIS)))
        .expect(1)
        .mount(&server)
        .await;

    let analysis = client_for(&server).analyze(DOCUMENT).await.unwrap();
    assert_eq!(analysis.document_type, "Permit");
    assert_eq!(analysis.risk_level, RiskLevel::Medium);
    assert_eq!(analysis.requirements.len(), 2);
}

#[tokio::test]
async fn analyze_accepts_fenced_content() {
    let server = MockServer::start().await;
    let fenced = format!("```json\n{ANALYSIS}\n```");

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&fenced)))
        .mount(&server)
        .await;

    let outcome = analyze_or_fallback(&client_for(&server), DOCUMENT).await.unwrap();
    assert_eq!(outcome.source, AnalysisSource::Service);
    assert_eq!(outcome.analysis.summary, "Vendor permit conditions.");
}

// ── Malformed responses ─────────────────────────────────────────────

#[tokio::test]
async fn prose_content_is_malformed_and_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion("Sorry, I can't read that.")),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.analyze(DOCUMENT).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(_)), "got {err:?}");

    let outcome = analyze_or_fallback(&client, DOCUMENT).await.unwrap();
    assert_eq!(outcome.source, AnalysisSource::ManualFallback);
    assert_eq!(outcome.analysis.requirements.len(), 3);
    assert_eq!(outcome.analysis.document_type, "Permit");
}

#[tokio::test]
async fn non_json_envelope_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze(DOCUMENT).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_choices_are_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze(DOCUMENT).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(_)), "got {err:?}");
}

// ── Terminal errors ─────────────────────────────────────────────────

#[tokio::test]
async fn api_error_is_terminal_and_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = analyze_or_fallback(&client_for(&server), DOCUMENT)
        .await
        .unwrap_err();
    match err {
        AnalysisError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = analyze_or_fallback(&client, DOCUMENT).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn blank_document_is_rejected_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(ANALYSIS)))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("  \n ").await.unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedInput(_)), "got {err:?}");
}

#[tokio::test]
async fn long_documents_are_truncated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(ANALYSIS)))
        .expect(1)
        .mount(&server)
        .await;

    let config = AnalysisConfig::new("test-key")
        .unwrap()
        .with_base_url(&server.uri())
        .unwrap()
        .with_max_document_chars(10);
    let client = AnalysisClient::new(config).unwrap();
    client.analyze(&"x".repeat(500)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["messages"][1]["content"], "xxxxxxxxxx");
    assert_eq!(body["messages"][0]["role"], "system");
}
