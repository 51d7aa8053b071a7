use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, format_clock};
use wasm_bindgen::JsValue;

/// Wall clock backed by the browser's `Date.now()`.
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Logger writing structured entries to the browser console.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// Verbose configuration for local development builds.
    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    /// Quieter configuration keeping warnings and errors only.
    pub fn new_production() -> Self {
        Self::new(LogLevel::Warn)
    }

    fn format_entry(entry: &LogEntry) -> String {
        let mut line = format!(
            "[{}] {} {} {}",
            format_clock(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );
        if let Some(metadata) = &entry.metadata {
            line.push_str(" | ");
            line.push_str(metadata);
        }
        line
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let line = JsValue::from_str(&Self::format_entry(&entry));
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::log_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }
}
