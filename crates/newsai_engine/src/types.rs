use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// Shown whenever the service did not supply its own error message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error connecting to the analysis server";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Url,
    Text,
}

/// JSON body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzePayload {
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub content: String,
}

/// JSON body of a successful analysis. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    pub sentiment: String,
    pub confidence: f64,
    pub summary: String,
    pub original_length: u64,
}

/// Optional body of a failed analysis.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("service error (http {status}): {message}")]
    Service { status: u16, message: String },
    #[error("http status {status}")]
    Status { status: u16 },
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl AnalyzeError {
    /// Message for the user: the service's own text when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            AnalyzeError::Service { message, .. } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalyzeResponse, AnalyzeError>,
    },
}
