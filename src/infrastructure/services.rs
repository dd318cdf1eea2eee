//! Browser implementations of the domain logging abstractions.

use crate::domain::logging::{Clock, LogLevel, LogRecord, Logger};
use crate::time_utils::format_clock;

/// Writes records to the devtools console at the matching severity
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn write(&self, record: &LogRecord) {
        let line = record.render();
        match record.level {
            LogLevel::Trace | LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

/// Wall clock of the browser
#[derive(Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn label(&self, timestamp_ms: u64) -> String {
        format_clock(timestamp_ms)
    }
}
