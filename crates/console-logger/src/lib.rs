//! Console Logger
//!
//! `log` backend for the browser console. Keeps the most recent records in a
//! circular buffer so they can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records kept in history by [`init`]
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Render as a single console line
    pub fn format(&self) -> String {
        format!(
            "{} [{} {}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Console logger with bounded history
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<LogEntry>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            history: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.history.lock() {
            Ok(history) => history.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
    }

    fn push(&self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut history) = self.history.lock() else {
            return;
        };
        while history.len() >= self.capacity {
            history.pop_front();
        }
        history.push_back(entry);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&entry.format());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug => web_sys::console::log_1(&line),
        Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(entry: &LogEntry) {
    eprintln!("{}", entry.format());
}

/// Install the global logger with the default history size
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

/// Install the global logger.
///
/// Only the first call takes effect; later calls return the `log` crate's
/// `SetLoggerError`.
pub fn init_with_capacity(
    level: LevelFilter,
    capacity: usize,
) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(logger)
}

/// Records buffered by the global logger (empty if not installed)
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_records_are_buffered_in_order() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 10);
        emit(&logger, Level::Info, "first");
        emit(&logger, Level::Warn, "second");

        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "first");
        assert_eq!(recent[1].message, "second");
        assert_eq!(recent[1].level, Level::Warn);
        assert_eq!(recent[0].target, "test");
    }

    #[test]
    fn test_buffer_drops_oldest_when_full() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("msg {}", i));
        }

        let messages: Vec<String> = logger.recent().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Info, "hidden too");
        emit(&logger, Level::Error, "shown");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].message, "shown");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        emit(&logger, Level::Error, "gone");
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_clear() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 4);
        emit(&logger, Level::Info, "a");
        logger.clear();
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_format_contains_level_and_target() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 4);
        emit(&logger, Level::Error, "boom");
        let line = logger.recent()[0].format();
        assert!(line.contains("[ERROR test] boom"));
    }
}
