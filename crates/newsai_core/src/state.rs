use crate::view_model::{AppViewModel, ResultView};
use crate::{AnalysisRequest, AnalysisResult, InputMode};

pub type RequestId = u64;

/// Outcome of the most recent submission. Result and error are exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    None,
    Success(AnalysisResult),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    active_mode: InputMode,
    input_value: String,
    /// Id of the in-flight request; `Some` means pending.
    in_flight: Option<RequestId>,
    last_request_id: RequestId,
    outcome: Outcome,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_mode(&self) -> InputMode {
        self.active_mode
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.outcome {
            Outcome::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let (placeholder, multiline) = match self.active_mode {
            InputMode::Url => ("https://example.com/news/...", false),
            InputMode::Text => ("Paste the full article text here...", true),
        };
        let pending = self.is_pending();
        AppViewModel {
            active_mode: self.active_mode,
            input_value: self.input_value.clone(),
            placeholder,
            multiline,
            submit_enabled: !pending && !self.input_is_blank(),
            submit_label: if pending {
                "Processing..."
            } else {
                "Analyze article"
            },
            pending,
            result: self.result().map(ResultView::from_result),
            error: self.error().map(ToOwned::to_owned),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn input_is_blank(&self) -> bool {
        self.input_value.trim().is_empty()
    }

    pub(crate) fn set_mode(&mut self, mode: InputMode) {
        if self.active_mode != mode {
            self.active_mode = mode;
            self.dirty = true;
        }
    }

    pub(crate) fn set_input(&mut self, value: String) {
        if self.input_value != value {
            self.input_value = value;
            self.dirty = true;
        }
    }

    /// Marks the state pending and snapshots the request to send.
    pub(crate) fn begin_submission(&mut self) -> (RequestId, AnalysisRequest) {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.in_flight = Some(request_id);
        self.outcome = Outcome::None;
        self.dirty = true;
        let request = AnalysisRequest {
            mode: self.active_mode,
            content: self.input_value.clone(),
        };
        (request_id, request)
    }

    /// Stores the outcome if `request_id` is the one in flight; stale ids are ignored.
    pub(crate) fn resolve(&mut self, request_id: RequestId, outcome: Outcome) {
        if self.in_flight != Some(request_id) {
            return;
        }
        self.in_flight = None;
        self.outcome = outcome;
        self.dirty = true;
    }
}
