use std::time::Duration;

use newsai_engine::{
    AnalyzeError, AnalyzePayload, AnalyzeResponse, AnalyzeSettings, Analyzer, ReqwestAnalyzer,
    SourceType, GENERIC_FAILURE_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn analyzer_for(server: &MockServer) -> ReqwestAnalyzer {
    ReqwestAnalyzer::new(AnalyzeSettings {
        endpoint: server.uri(),
        ..AnalyzeSettings::default()
    })
}

fn text_payload(content: &str) -> AnalyzePayload {
    AnalyzePayload {
        source_type: SourceType::Text,
        content: content.to_string(),
    }
}

#[tokio::test]
async fn analyzer_posts_json_and_parses_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"type": "text", "content": "Example article body."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "sentiment": "POS",
            "confidence": 0.92,
            "summary": "Short summary.",
            "original_length": 21
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = analyzer_for(&server)
        .analyze(&text_payload("Example article body."))
        .await
        .expect("analysis ok");

    assert_eq!(
        response,
        AnalyzeResponse {
            sentiment: "POS".to_string(),
            confidence: 0.92,
            summary: "Short summary.".to_string(),
            original_length: 21,
        }
    );
}

#[tokio::test]
async fn analyzer_sends_url_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_json(json!({"type": "url", "content": "https://news.example/a"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentiment": "NEG",
            "confidence": 0.4,
            "summary": "s",
            "original_length": 512
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = AnalyzePayload {
        source_type: SourceType::Url,
        content: "https://news.example/a".to_string(),
    };
    let response = analyzer_for(&server).analyze(&payload).await.expect("ok");
    assert_eq!(response.sentiment, "NEG");
}

#[tokio::test]
async fn analyzer_surfaces_service_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "model unavailable"})))
        .mount(&server)
        .await;

    let err = analyzer_for(&server)
        .analyze(&text_payload("body"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AnalyzeError::Service {
            status: 500,
            message: "model unavailable".to_string()
        }
    );
    assert_eq!(err.user_message(), "model unavailable");
}

#[tokio::test]
async fn analyzer_falls_back_without_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = analyzer_for(&server)
        .analyze(&text_payload("body"))
        .await
        .unwrap_err();

    assert_eq!(err, AnalyzeError::Status { status: 503 });
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn analyzer_rejects_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sentiment": "POS"})))
        .mount(&server)
        .await;

    let err = analyzer_for(&server)
        .analyze(&text_payload("body"))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyzeError::Decode(_)), "{err:?}");
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn analyzer_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({
                    "sentiment": "POS",
                    "confidence": 1.0,
                    "summary": "late",
                    "original_length": 1
                })),
        )
        .mount(&server)
        .await;

    let analyzer = ReqwestAnalyzer::new(AnalyzeSettings {
        endpoint: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..AnalyzeSettings::default()
    });

    let err = analyzer.analyze(&text_payload("body")).await.unwrap_err();
    assert!(matches!(err, AnalyzeError::Timeout(_)), "{err:?}");
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn analyzer_reports_unreachable_service() {
    // Bind then drop a listener so the port is known to refuse connections.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        format!("http://{}", listener.local_addr().expect("addr"))
    };
    let analyzer = ReqwestAnalyzer::new(AnalyzeSettings {
        endpoint: uri,
        connect_timeout: Duration::from_secs(2),
        ..AnalyzeSettings::default()
    });

    let err = analyzer.analyze(&text_payload("body")).await.unwrap_err();
    assert!(
        matches!(err, AnalyzeError::Transport(_) | AnalyzeError::Timeout(_)),
        "{err:?}"
    );
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}
