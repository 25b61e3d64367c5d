use newsai_core::AppViewModel;
use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::*;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub tabs: Rect,
    pub input: Rect,
    pub submit: Rect,
    /// Present only while an error is shown.
    pub error: Option<Rect>,
    pub result: Rect,
    pub help: Rect,
}

pub fn split(area: Rect, view: &AppViewModel) -> ScreenAreas {
    let input_height = if view.multiline {
        TEXT_INPUT_HEIGHT
    } else {
        URL_INPUT_HEIGHT
    };
    let error_height = if view.error.is_some() { ERROR_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(TABS_HEIGHT),
        Constraint::Length(input_height),
        Constraint::Length(SUBMIT_HEIGHT),
        Constraint::Length(error_height),
        Constraint::Min(0),
        Constraint::Length(HELP_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        input: chunks[2],
        submit: chunks[3],
        error: (error_height > 0).then_some(chunks[4]),
        result: chunks[5],
        help: chunks[6],
    }
}

/// Splits the result region into the sentiment card and the summary card.
pub fn split_result(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(SENTIMENT_CARD_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);
    (chunks[0], chunks[1])
}
