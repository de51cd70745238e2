// Session logger: mirrors log records to stderr and keeps a bounded
// history that the status line reads from.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

const MAX_LOG_LINES: usize = 256;

/// Fixed-capacity ring of log entries, oldest dropped first
#[derive(Debug)]
pub struct LogHistory {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(MAX_LOG_LINES)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry at `level` or more severe
    pub fn latest(&self, level: Level) -> Option<&LogEntry> {
        self.entries.iter().rev().find(|e| e.level <= level)
    }

    /// Up to `n` newest entries, oldest first
    #[cfg(test)]
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

lazy_static! {
    static ref LOGS: Mutex<LogHistory> = Mutex::new(LogHistory::new(MAX_LOG_LINES));
}

struct SessionLogger;

static LOGGER: SessionLogger = SessionLogger;

impl Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("[{:>5}] {}: {}", record.level(), record.target(), record.args());

        if let Ok(mut logs) = LOGS.lock() {
            logs.push(LogEntry {
                level: record.level(),
                target: record.target().to_string(),
                msg: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}

/// Parse a level name ("off", "error", "warn", "info", "debug", "trace").
/// Unknown names fall back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Install the session logger. Calling it again only changes the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}

/// Newest message worth showing in the status line
pub fn latest_status() -> Option<LogEntry> {
    LOGS.lock().ok().and_then(|logs| logs.latest(Level::Info).cloned())
}
