//! Structured logging for the dashboard.
//!
//! A record carries a level, the component that emitted it, a message and a
//! list of `key=value` fields. Fetch settlements are logged with their slot,
//! request number and outcome so a superseded response can be told apart from
//! an applied one in the console.

use derive_more::Display;
use once_cell::sync::OnceCell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "trace")]
    Trace,
    #[display(fmt = "debug")]
    Debug,
    #[display(fmt = "info")]
    Info,
    #[display(fmt = "warn")]
    Warn,
    #[display(fmt = "error")]
    Error,
}

/// Layer and name of whatever emitted a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "domain/{}", _0)]
    Domain(&'static str),
    #[display(fmt = "app/{}", _0)]
    Application(&'static str),
    #[display(fmt = "infra/{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "ui/{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogField {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for LogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() || self.value.contains(char::is_whitespace) {
            write!(f, "{}={:?}", self.key, self.value)
        } else {
            write!(f, "{}={}", self.key, self.value)
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp_ms: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub fields: Vec<LogField>,
}

impl LogRecord {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp_ms: clock().now_ms(),
            level,
            component,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push(LogField { key, value: value.to_string() });
        self
    }

    /// `12:00:00.250 info  app/Fetch request settled slot=listing seq=3`
    pub fn render(&self) -> String {
        let mut line = format!(
            "{} {:<5} {} {}",
            clock().label(self.timestamp_ms),
            self.level.to_string(),
            self.component,
            self.message
        );
        for field in &self.fields {
            line.push(' ');
            line.push_str(&field.to_string());
        }
        line
    }
}

/// Source of record timestamps
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
    fn label(&self, timestamp_ms: u64) -> String;
}

pub trait Logger: Send + Sync {
    fn write(&self, record: &LogRecord);

    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn emit(&self, record: LogRecord) {
        if self.enabled(record.level) {
            self.write(&record);
        }
    }
}

static LOGGER: OnceCell<Box<dyn Logger>> = OnceCell::new();
static CLOCK: OnceCell<Box<dyn Clock>> = OnceCell::new();

/// First install wins; the page installs once at startup.
pub fn install_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

pub fn install_clock(clock: Box<dyn Clock>) {
    let _ = CLOCK.set(clock);
}

pub fn logger() -> &'static dyn Logger {
    LOGGER.get().map(Box::as_ref).unwrap_or(&Silent)
}

pub fn clock() -> &'static dyn Clock {
    CLOCK.get().map(Box::as_ref).unwrap_or(&Ticks)
}

struct Silent;

impl Logger for Silent {
    fn write(&self, _record: &LogRecord) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Counts calls until a wall clock is installed
struct Ticks;

impl Clock for Ticks {
    fn now_ms(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TICK: AtomicU64 = AtomicU64::new(0);
        TICK.fetch_add(1, Ordering::Relaxed)
    }

    fn label(&self, timestamp_ms: u64) -> String {
        format!("#{timestamp_ms:06}")
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {{
        let logger = $crate::domain::logging::logger();
        if logger.enabled($level) {
            logger.emit($crate::domain::logging::LogRecord::new($level, $component, format!($($arg)*)));
        }
    }};
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::__emit_log!($crate::domain::logging::LogLevel::Trace, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::__emit_log!($crate::domain::logging::LogLevel::Debug, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::__emit_log!($crate::domain::logging::LogLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::__emit_log!($crate::domain::logging::LogLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::__emit_log!($crate::domain::logging::LogLevel::Error, $component, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Capture {
        min_level: LogLevel,
        lines: Mutex<Vec<String>>,
    }

    impl Logger for Capture {
        fn write(&self, record: &LogRecord) {
            self.lines.lock().unwrap().push(record.render());
        }

        fn enabled(&self, level: LogLevel) -> bool {
            level >= self.min_level
        }
    }

    #[test]
    fn fields_render_as_key_value_pairs() {
        let record = LogRecord::new(LogLevel::Info, LogComponent::Application("Fetch"), "request settled")
            .field("slot", "listing")
            .field("seq", 7)
            .field("outcome", "stale");
        assert!(record
            .render()
            .ends_with("info  app/Fetch request settled slot=listing seq=7 outcome=stale"));
    }

    #[test]
    fn field_values_with_spaces_are_quoted() {
        let record = LogRecord::new(LogLevel::Error, LogComponent::Infrastructure("HTTP"), "failed")
            .field("reason", "502 Bad Gateway")
            .field("body", "");
        assert!(record.render().ends_with(r#"failed reason="502 Bad Gateway" body="""#));
    }

    #[test]
    fn records_below_minimum_level_are_dropped() {
        let capture = Capture { min_level: LogLevel::Warn, lines: Mutex::new(Vec::new()) };
        capture.emit(LogRecord::new(LogLevel::Debug, LogComponent::Presentation("MarketTable"), "mounted"));
        capture.emit(LogRecord::new(LogLevel::Error, LogComponent::Presentation("MarketTable"), "failed"));
        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("error ui/MarketTable failed"));
    }
}
