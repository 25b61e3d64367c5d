use crate::present::{color_class_for, confidence_percent, display_label_for, emoji_for};
use crate::{AnalysisResult, InputMode, SentimentStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub active_mode: InputMode,
    pub input_value: String,
    pub placeholder: &'static str,
    pub multiline: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub pending: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub dirty: bool,
}

/// Display-ready values for a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub label: &'static str,
    pub style: SentimentStyle,
    pub emoji: &'static str,
    pub confidence_percent: i64,
    pub summary: String,
    pub original_length: u64,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            label: display_label_for(&result.sentiment),
            style: color_class_for(&result.sentiment),
            emoji: emoji_for(&result.sentiment),
            confidence_percent: confidence_percent(result.confidence),
            summary: result.summary.clone(),
            original_length: result.original_length,
        }
    }
}
