//! Structured logging shared by every layer.
//!
//! Domain and application code only see the [`Logger`] and [`Clock`] traits.
//! The console sink and wall clock live in `infrastructure::services` and are
//! installed once at startup; before that every entry is dropped.

use std::fmt;
use std::sync::OnceLock;

use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Where an entry comes from: layer plus the type that emitted it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

/// One log line with optional `key=value` fields
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    /// Stamped with the installed clock
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: clock().now_millis(),
            level,
            component,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }
}

/// Log sink
pub trait Logger: Send + Sync {
    fn min_level(&self) -> LogLevel;

    fn write(&self, entry: &LogEntry);

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }
}

/// Millisecond wall clock used to stamp entries
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;

    fn format_millis(&self, millis: u64) -> String;
}

struct Sinks {
    logger: Box<dyn Logger>,
    clock: Box<dyn Clock>,
}

static SINKS: OnceLock<Sinks> = OnceLock::new();

/// Install the process-wide logger and clock.
/// Returns `false` if a pair was already installed; the first one stays.
pub fn install(logger: Box<dyn Logger>, clock: Box<dyn Clock>) -> bool {
    SINKS.set(Sinks { logger, clock }).is_ok()
}

pub fn logger() -> &'static dyn Logger {
    SINKS.get().map(|s| s.logger.as_ref()).unwrap_or(&Silent)
}

pub fn clock() -> &'static dyn Clock {
    SINKS.get().map(|s| s.clock.as_ref()).unwrap_or(&TickClock)
}

pub fn enabled(level: LogLevel) -> bool {
    logger().enabled(level)
}

/// Send a prepared entry to the installed logger if its level passes
pub fn emit(entry: LogEntry) {
    let logger = logger();
    if logger.enabled(entry.level) {
        logger.write(&entry);
    }
}

/// Macro backend: the message is only formatted when the level passes
#[doc(hidden)]
pub fn emit_args(level: LogLevel, component: LogComponent, args: fmt::Arguments<'_>) {
    if enabled(level) {
        emit(LogEntry::new(level, component, args.to_string()));
    }
}

/// Drops everything until a real logger is installed
struct Silent;

impl Logger for Silent {
    fn min_level(&self) -> LogLevel {
        LogLevel::Error
    }

    fn write(&self, _entry: &LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Monotonic counter standing in for time before a clock is installed
struct TickClock;

impl Clock for TickClock {
    fn now_millis(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TICKS: AtomicU64 = AtomicU64::new(0);
        TICKS.fetch_add(1, Ordering::Relaxed)
    }

    fn format_millis(&self, millis: u64) -> String {
        format!("#{:06}", millis)
    }
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit_args($crate::domain::logging::LogLevel::Trace, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit_args($crate::domain::logging::LogLevel::Debug, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit_args($crate::domain::logging::LogLevel::Info, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit_args($crate::domain::logging::LogLevel::Warn, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit_args($crate::domain::logging::LogLevel::Error, $component, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::Info.as_ref(), "INFO");
        assert!(LogLevel::Trace < LogLevel::Error);
    }

    #[test]
    fn fields_keep_insertion_order() {
        let entry = LogEntry::new(LogLevel::Debug, LogComponent::Application("ChartService"), "render")
            .field("asset", "EUR/USD")
            .field("bars", 50);
        assert_eq!(entry.fields, vec![("asset", "EUR/USD".to_string()), ("bars", "50".to_string())]);
    }

    #[test]
    fn fallback_logger_is_silent() {
        assert!(!Silent.enabled(LogLevel::Error));
        // Nothing installed in this test binary: must be a no-op
        log_error!(LogComponent::Domain("Test"), "dropped {}", 1);
    }
}
