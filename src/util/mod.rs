//! Shared utilities

pub mod config;
pub mod logger;
pub mod shell;

pub use logger::{Level, LogRecord, Logger, RecordingLogger, TracingLogger};
pub use shell::Shell;
