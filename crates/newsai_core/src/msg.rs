use crate::{AnalysisResult, InputMode, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User switched between URL and text input.
    SetMode(InputMode),
    /// User edited the input box; carries the full raw value.
    SetInput(String),
    /// User triggered analysis of the current input.
    SubmitStart,
    /// The service answered with a result for `request_id`.
    SubmitSuccess {
        request_id: RequestId,
        result: AnalysisResult,
    },
    /// The request for `request_id` failed; `message` is user-facing.
    SubmitFailure {
        request_id: RequestId,
        message: String,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
}
