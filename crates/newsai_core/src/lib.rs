//! NewsAI core: pure state machine, presenter and view-model helpers.
mod effect;
mod msg;
pub mod present;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use present::{color_class_for, confidence_percent, display_label_for, emoji_for, SentimentStyle};
pub use state::{AppState, Outcome, RequestId};
pub use types::{AnalysisRequest, AnalysisResult, InputMode, SentimentLabel};
pub use update::update;
pub use view_model::{AppViewModel, ResultView};
