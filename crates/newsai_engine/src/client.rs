use std::time::Duration;

use newsai_logging::{newsai_debug, newsai_info, newsai_warn, TARGET_REQUESTS};
use reqwest::header::CONTENT_TYPE;

use crate::types::ErrorBody;
use crate::{AnalyzeError, AnalyzePayload, AnalyzeResponse};

pub const ANALYZE_PATH: &str = "/api/analyze";

#[derive(Debug, Clone)]
pub struct AnalyzeSettings {
    /// Base URL of the service, e.g. `http://localhost:5000`.
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// Overall request timeout. `None` leaves it to the transport.
    pub request_timeout: Option<Duration>,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

impl AnalyzeSettings {
    pub fn analyze_url(&self) -> Result<reqwest::Url, AnalyzeError> {
        let raw = format!("{}{}", self.endpoint.trim_end_matches('/'), ANALYZE_PATH);
        reqwest::Url::parse(&raw).map_err(|err| AnalyzeError::InvalidEndpoint(err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, payload: &AnalyzePayload) -> Result<AnalyzeResponse, AnalyzeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalyzer {
    settings: AnalyzeSettings,
}

impl ReqwestAnalyzer {
    pub fn new(settings: AnalyzeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalyzeSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalyzeError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| AnalyzeError::Transport(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Analyzer for ReqwestAnalyzer {
    async fn analyze(&self, payload: &AnalyzePayload) -> Result<AnalyzeResponse, AnalyzeError> {
        let url = self.settings.analyze_url()?;
        let client = self.build_client()?;

        newsai_debug!(
            target: TARGET_REQUESTS,
            "POST {} type={:?} content_len={}",
            url,
            payload.source_type,
            payload.content.len()
        );

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let err = failure_from_body(status.as_u16(), &body);
            newsai_warn!(target: TARGET_REQUESTS, "analysis failed: {}", err);
            return Err(err);
        }

        let parsed: AnalyzeResponse = serde_json::from_slice(&body).map_err(|err| {
            newsai_warn!(target: TARGET_REQUESTS, "undecodable analysis body: {}", err);
            AnalyzeError::Decode(err.to_string())
        })?;

        newsai_info!(
            target: TARGET_REQUESTS,
            "analysis ok: status={} sentiment={} original_length={}",
            status.as_u16(),
            parsed.sentiment,
            parsed.original_length
        );
        Ok(parsed)
    }
}

/// A non-2xx body is only trusted for a non-empty `error` string.
fn failure_from_body(status: u16, body: &[u8]) -> AnalyzeError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty());
    match message {
        Some(message) => AnalyzeError::Service { status, message },
        None => AnalyzeError::Status { status },
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        return AnalyzeError::Timeout(err.to_string());
    }
    AnalyzeError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_url_joins_base_and_path() {
        let settings = AnalyzeSettings {
            endpoint: "http://localhost:5000/".to_string(),
            ..AnalyzeSettings::default()
        };
        assert_eq!(
            settings.analyze_url().unwrap().as_str(),
            "http://localhost:5000/api/analyze"
        );
    }

    #[test]
    fn analyze_url_rejects_garbage() {
        let settings = AnalyzeSettings {
            endpoint: "not a url".to_string(),
            ..AnalyzeSettings::default()
        };
        assert!(matches!(
            settings.analyze_url(),
            Err(AnalyzeError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn failure_body_prefers_service_message() {
        assert_eq!(
            failure_from_body(500, br#"{"error":"model unavailable"}"#),
            AnalyzeError::Service {
                status: 500,
                message: "model unavailable".to_string()
            }
        );
        assert_eq!(
            failure_from_body(500, br#"{"error":""}"#),
            AnalyzeError::Status { status: 500 }
        );
        assert_eq!(
            failure_from_body(502, b"<html>Bad Gateway</html>"),
            AnalyzeError::Status { status: 502 }
        );
        assert_eq!(
            failure_from_body(404, br#"{"detail":"nope"}"#),
            AnalyzeError::Status { status: 404 }
        );
    }
}
