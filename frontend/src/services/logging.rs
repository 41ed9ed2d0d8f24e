use shared::LogLevel;
use std::cell::Cell;

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = Cell::new(LogLevel::Info);
}

/// Component-tagged logger writing to the browser console
pub struct Logger;

impl Logger {
    pub fn init(level: LogLevel) {
        MIN_LEVEL.with(|min| min.set(level));
    }

    pub fn enabled(level: LogLevel) -> bool {
        MIN_LEVEL.with(|min| level >= min.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if !Self::enabled(level) {
            return;
        }
        let line = format_line(level, component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(level: LogLevel, component: &str, message: &str) -> String {
    format!("[{}] [{}] {}", level, component, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_level_filter() {
        Logger::init(LogLevel::Warn);
        assert!(!Logger::enabled(LogLevel::Debug));
        assert!(!Logger::enabled(LogLevel::Info));
        assert!(Logger::enabled(LogLevel::Warn));
        assert!(Logger::enabled(LogLevel::Error));

        Logger::init(LogLevel::Debug);
        assert!(Logger::enabled(LogLevel::Debug));
    }

    #[wasm_bindgen_test]
    fn test_line_format() {
        assert_eq!(
            format_line(LogLevel::Error, "expense-list", "Failed to load expenses: 500 - "),
            "[error] [expense-list] Failed to load expenses: 500 - "
        );
    }
}
