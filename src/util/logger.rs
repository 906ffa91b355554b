//! Logging collaborator for validation diagnostics.
//!
//! Validation never prints on its own. It hands each diagnostic to a
//! [`Logger`], which decides where it goes.

use std::fmt;
use std::sync::Mutex;

/// Severity of a logged diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// Sink for diagnostics.
///
/// `scope` is a free-form tag such as `"config"`, or `None`.
pub trait Logger {
    fn warn(&self, scope: Option<&str>, message: &str);
    fn error(&self, scope: Option<&str>, message: &str);

    /// Log at the given level.
    fn log(&self, level: Level, scope: Option<&str>, message: &str) {
        match level {
            Level::Warn => self.warn(scope, message),
            Level::Error => self.error(scope, message),
        }
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn warn(&self, scope: Option<&str>, message: &str) {
        (**self).warn(scope, message)
    }

    fn error(&self, scope: Option<&str>, message: &str) {
        (**self).error(scope, message)
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warn(&self, scope: Option<&str>, message: &str) {
        match scope {
            Some(scope) => tracing::warn!(scope, "{}", message),
            None => tracing::warn!("{}", message),
        }
    }

    fn error(&self, scope: Option<&str>, message: &str) {
        match scope {
            Some(scope) => tracing::error!(scope, "{}", message),
            None => tracing::error!("{}", message),
        }
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub scope: Option<String>,
    pub message: String,
}

/// Keeps every diagnostic in memory, in the order received.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Records at the given level.
    pub fn at_level(&self, level: Level) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .collect()
    }

    pub fn warnings(&self) -> Vec<LogRecord> {
        self.at_level(Level::Warn)
    }

    pub fn errors(&self) -> Vec<LogRecord> {
        self.at_level(Level::Error)
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, level: Level, scope: Option<&str>, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(LogRecord {
                level,
                scope: scope.map(str::to_string),
                message: message.to_string(),
            });
        }
    }
}

impl Logger for RecordingLogger {
    fn warn(&self, scope: Option<&str>, message: &str) {
        self.push(Level::Warn, scope, message);
    }

    fn error(&self, scope: Option<&str>, message: &str) {
        self.push(Level::Error, scope, message);
    }
}
