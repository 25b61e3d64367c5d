pub const APP_TITLE: &str = "NewsAI";
pub const APP_TAGLINE: &str = "Intelligent news analyst";

pub const TAB_URL: &str = "Analyze URL";
pub const TAB_TEXT: &str = "Manual text";

pub const INPUT_CARET: char = '▏';

pub const HELP_TEXT: &str =
    "Tab: switch mode | Enter: analyze (Alt+Enter / Ctrl+S in text mode) | Ctrl+U: clear | Esc: quit";

pub const HEADER_HEIGHT: u16 = 3;
pub const TABS_HEIGHT: u16 = 3;
pub const URL_INPUT_HEIGHT: u16 = 3;
pub const TEXT_INPUT_HEIGHT: u16 = 10;
pub const SUBMIT_HEIGHT: u16 = 3;
pub const ERROR_HEIGHT: u16 = 3;
pub const HELP_HEIGHT: u16 = 1;
pub const SENTIMENT_CARD_HEIGHT: u16 = 4;
