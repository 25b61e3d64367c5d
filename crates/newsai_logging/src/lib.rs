#![deny(missing_docs)]
//! Shared logging utilities for the NewsAI workspace.
//!
//! This crate provides the `newsai_*` logging macros used by the engine and the
//! app, and a minimal test initializer for the global logger. Library crates
//! never install a logger themselves; the binary decides where output goes.

/// Log target used for everything related to the analysis request lifecycle.
pub const TARGET_REQUESTS: &str = "newsai::requests";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! newsai_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! newsai_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! newsai_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! newsai_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! newsai_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    #[test]
    fn initialize_twice_is_harmless() {
        super::initialize_for_tests();
        super::initialize_for_tests();
        newsai_info!("logger ready for {}", super::TARGET_REQUESTS);
    }
}
