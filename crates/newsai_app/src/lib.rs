//! NewsAI terminal client: configuration, effect execution and the UI loop.
pub mod platform;
