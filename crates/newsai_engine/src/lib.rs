//! NewsAI engine: Analysis Service client and background request worker.
mod client;
mod engine;
mod types;

pub use client::{AnalyzeSettings, Analyzer, ReqwestAnalyzer, ANALYZE_PATH};
pub use engine::EngineHandle;
pub use types::{
    AnalyzeError, AnalyzePayload, AnalyzeResponse, EngineEvent, RequestId, SourceType,
    GENERIC_FAILURE_MESSAGE,
};
