//! Browser Logger
//!
//! `log` backend that writes to the browser console and keeps the most
//! recent records in a circular buffer, read back by the app's log panel.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Fixed-size buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct BrowserLogger {
    level: LevelFilter,
    recent: Mutex<RingBuffer>,
}

impl BrowserLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            recent: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    fn remember(&self, line: String) {
        self.recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }

    pub fn recent(&self) -> Vec<String> {
        self.recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }
}

/// `LEVEL target: message`, without timestamp (the console adds its own)
pub fn format_record(level: Level, target: &str, args: &std::fmt::Arguments<'_>) -> String {
    format!("{:<5} {}: {}", level, target, args)
}

impl Log for BrowserLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), record.args());
        let js_line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js_line),
            Level::Warn => web_sys::console::warn_1(&js_line),
            Level::Info => web_sys::console::info_1(&js_line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&js_line),
        }
        let stamp: String = js_sys::Date::new_0().to_iso_string().into();
        self.remember(format!("{} {}", stamp, line));
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<BrowserLogger> = OnceLock::new();

/// Install the logger as the global `log` backend.
///
/// Calling this more than once returns the error from `log::set_logger`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| BrowserLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Records kept by the installed logger (empty before `init`)
pub fn recent_records() -> Vec<String> {
    LOGGER.get().map(BrowserLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_drops_oldest_when_full() {
        let mut ring = RingBuffer::new(3);
        for i in 0..5 {
            ring.push(format!("line {}", i));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_ring_with_zero_capacity_stays_empty() {
        let mut ring = RingBuffer::new(0);
        ring.push("ignored".to_string());
        assert!(ring.is_empty());
    }

    #[test]
    fn test_format_record() {
        let line =
            format_record(Level::Warn, "board_ui::query", &format_args!("retry in {}ms", 1000));
        assert_eq!(line, "WARN  board_ui::query: retry in 1000ms");
    }

    #[test]
    fn test_logger_returns_remembered_lines_oldest_first() {
        let logger = BrowserLogger::new(LevelFilter::Debug, 2);
        logger.remember("a".to_string());
        logger.remember("b".to_string());
        logger.remember("c".to_string());
        assert_eq!(logger.recent(), vec!["b", "c"]);
    }

    #[test]
    fn test_recent_records_empty_before_init() {
        assert!(LOGGER.get().is_none());
        assert!(recent_records().is_empty());
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = BrowserLogger::new(LevelFilter::Info, 10);
        let debug = Metadata::builder().level(Level::Debug).target("x").build();
        let error = Metadata::builder().level(Level::Error).target("x").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
