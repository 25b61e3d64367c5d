use std::time::Duration;

use newsai_core::{AnalysisRequest, AnalysisResult, Effect, InputMode, Msg, SentimentLabel};
use newsai_engine::{AnalyzePayload, AnalyzeResponse, EngineEvent, EngineHandle, SourceType};
use newsai_logging::{newsai_info, newsai_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Analyze {
                    request_id,
                    request,
                } => {
                    newsai_info!(
                        "Analyze request_id={} type={} content_len={}",
                        request_id,
                        request.mode,
                        request.content.len()
                    );
                    self.engine.analyze(request_id, to_payload(request));
                }
            }
        }
    }

    pub fn try_next(&self) -> Option<Msg> {
        self.engine.try_recv().map(event_to_msg)
    }

    pub fn next_timeout(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(event_to_msg)
    }
}

fn to_payload(request: AnalysisRequest) -> AnalyzePayload {
    let source_type = match request.mode {
        InputMode::Url => SourceType::Url,
        InputMode::Text => SourceType::Text,
    };
    AnalyzePayload {
        source_type,
        content: request.content,
    }
}

fn to_result(response: AnalyzeResponse) -> AnalysisResult {
    AnalysisResult {
        sentiment: SentimentLabel::from_wire(&response.sentiment),
        confidence: response.confidence,
        summary: response.summary,
        original_length: response.original_length,
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted {
            request_id,
            result: Ok(response),
        } => Msg::SubmitSuccess {
            request_id,
            result: to_result(response),
        },
        EngineEvent::AnalysisCompleted {
            request_id,
            result: Err(err),
        } => {
            newsai_warn!("Request {} failed: {}", request_id, err);
            Msg::SubmitFailure {
                request_id,
                message: err.user_message(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsai_engine::{AnalyzeError, GENERIC_FAILURE_MESSAGE};

    #[test]
    fn request_maps_to_wire_payload() {
        let payload = to_payload(AnalysisRequest {
            mode: InputMode::Url,
            content: "https://example.com".to_string(),
        });
        assert_eq!(payload.source_type, SourceType::Url);
        assert_eq!(payload.content, "https://example.com");
    }

    #[test]
    fn unknown_sentiment_survives_mapping() {
        let msg = event_to_msg(EngineEvent::AnalysisCompleted {
            request_id: 3,
            result: Ok(AnalyzeResponse {
                sentiment: "MIXED".to_string(),
                confidence: 0.3,
                summary: "s".to_string(),
                original_length: 9,
            }),
        });
        match msg {
            Msg::SubmitSuccess { request_id, result } => {
                assert_eq!(request_id, 3);
                assert_eq!(result.sentiment, SentimentLabel::Other("MIXED".to_string()));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn failures_become_user_messages() {
        let msg = event_to_msg(EngineEvent::AnalysisCompleted {
            request_id: 4,
            result: Err(AnalyzeError::Decode("expected value".to_string())),
        });
        assert_eq!(
            msg,
            Msg::SubmitFailure {
                request_id: 4,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            }
        );
    }
}
