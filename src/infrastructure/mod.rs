pub mod rendering;

/// Concrete logger and clock
pub mod services {
    use std::fmt::Write as _;

    use crate::domain::logging::{self, Clock, LogEntry, LogLevel, Logger};

    /// Browser console on wasm32, stderr elsewhere
    pub struct ConsoleLogger {
        min_level: LogLevel,
    }

    impl ConsoleLogger {
        pub fn new(min_level: LogLevel) -> Self {
            Self { min_level }
        }

        pub fn new_production() -> Self {
            Self::new(LogLevel::Info)
        }

        pub fn new_development() -> Self {
            Self::new(LogLevel::Debug)
        }

        /// `[time] LEVEL LAYER:Type | message | key=value ...`
        pub fn format_entry(&self, entry: &LogEntry) -> String {
            let mut line = format!(
                "[{}] {:>5} {} | {}",
                logging::clock().format_millis(entry.timestamp),
                entry.level.as_ref(),
                entry.component,
                entry.message
            );
            if !entry.fields.is_empty() {
                line.push_str(" |");
                for (key, value) in &entry.fields {
                    let _ = write!(line, " {}={}", key, value);
                }
            }
            line
        }
    }

    impl Logger for ConsoleLogger {
        fn min_level(&self) -> LogLevel {
            self.min_level
        }

        fn write(&self, entry: &LogEntry) {
            let line = self.format_entry(entry);

            #[cfg(target_arch = "wasm32")]
            {
                let value = wasm_bindgen::JsValue::from_str(&line);
                match entry.level {
                    LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&value),
                    LogLevel::Info => web_sys::console::info_1(&value),
                    LogLevel::Warn => web_sys::console::warn_1(&value),
                    LogLevel::Error => web_sys::console::error_1(&value),
                }
            }

            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", line);
        }
    }

    /// Milliseconds since the Unix epoch
    pub struct SystemClock;

    impl Clock for SystemClock {
        #[cfg(target_arch = "wasm32")]
        fn now_millis(&self) -> u64 {
            js_sys::Date::now() as u64
        }

        #[cfg(not(target_arch = "wasm32"))]
        fn now_millis(&self) -> u64 {
            chrono::Utc::now().timestamp_millis().max(0) as u64
        }

        fn format_millis(&self, millis: u64) -> String {
            chrono::DateTime::from_timestamp_millis(millis as i64)
                .map(|dt| dt.format("%H:%M:%S%.3f").to_string())
                .unwrap_or_else(|| millis.to_string())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::logging::LogComponent;

        #[test]
        fn line_carries_level_component_and_fields() {
            let entry = LogEntry::new(LogLevel::Warn, LogComponent::Application("ChartService"), "flat series")
                .field("bars", 1)
                .field("asset", "AAPL");
            let line = ConsoleLogger::new_development().format_entry(&entry);
            assert!(line.ends_with(" WARN APP:ChartService | flat series | bars=1 asset=AAPL"), "{}", line);
        }

        #[test]
        fn level_filter() {
            let logger = ConsoleLogger::new_production();
            assert!(!logger.enabled(LogLevel::Debug));
            assert!(logger.enabled(LogLevel::Info));
            assert!(ConsoleLogger::new_development().enabled(LogLevel::Debug));
        }

        #[test]
        fn clock_formats_millis() {
            assert_eq!(SystemClock.format_millis(1_500), "00:00:01.500");
        }
    }
}
