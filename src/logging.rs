//! Structured logging with sensitive-data redaction
//!
//! Debug entries are off by default and gated by a global flag, so the
//! library stays silent unless a caller opts in. Values logged through
//! `redact_hex` never reveal full key material.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag to enable/disable debug logging
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable debug logging
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Structured log entry
#[derive(Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub module: &'static str,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    pub fn new(level: LogLevel, module: &'static str, message: impl Into<String>) -> Self {
        Self {
            level,
            module,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the log entry
    pub fn field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    /// Write the entry to stderr, honoring the debug gate
    pub fn emit(self) {
        if self.level == LogLevel::Debug && !is_debug_enabled() {
            return;
        }
        let mut line = format!("[{}] {}: {}", self.level, self.module, self.message);
        for (key, value) in &self.fields {
            line.push_str(&format!(" {}={}", key, value));
        }
        eprintln!("{}", line);
    }
}

/// Redact a hex string down to its first and last four characters
///
/// Short values are fully masked rather than partially shown.
pub fn redact_hex(value: &str) -> String {
    if value.len() <= 8 {
        return "****".to_string();
    }
    format!("{}…{}", &value[..4], &value[value.len() - 4..])
}

// MARK: - Tests
