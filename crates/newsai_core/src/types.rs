use std::fmt;

/// Which kind of source the user is submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Url,
    Text,
}

impl InputMode {
    /// Name used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Url => "url",
            InputMode::Text => "text",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InputMode::Url => InputMode::Text,
            InputMode::Text => InputMode::Url,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the controller state taken when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub mode: InputMode,
    pub content: String,
}

/// Sentiment classification as reported by the service.
///
/// Labels outside `POS`/`NEG`/`NEU` are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl SentimentLabel {
    pub fn from_wire(label: &str) -> Self {
        match label {
            "POS" => SentimentLabel::Positive,
            "NEG" => SentimentLabel::Negative,
            "NEU" => SentimentLabel::Neutral,
            other => SentimentLabel::Other(other.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            SentimentLabel::Positive => "POS",
            SentimentLabel::Negative => "NEG",
            SentimentLabel::Neutral => "NEU",
            SentimentLabel::Other(label) => label,
        }
    }
}

/// Successful analysis of one article.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub sentiment: SentimentLabel,
    /// Nominally in `[0, 1]`; not validated.
    pub confidence: f64,
    pub summary: String,
    /// Character count of the processed article, as reported by the service.
    pub original_length: u64,
}
