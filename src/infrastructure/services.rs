use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::logging::{Clock, LogEntry, LogLevel, Logger};

/// Console logger writing formatted entries to stdout, errors to stderr.
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

    fn format_log_entry(entry: &LogEntry) -> String {
        format!(
            "[{}] {} {} | {}",
            Self::format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        )
    }

    fn format_timestamp(timestamp: u64) -> String {
        format!("{}.{:03}", timestamp / 1000, timestamp % 1000)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.min_level {
            let formatted = Self::format_log_entry(&entry);
            match entry.level {
                LogLevel::Error => eprintln!("{formatted}"),
                _ => println!("{formatted}"),
            }
        }
    }
}

/// Wall clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp_ms(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
    }
}
