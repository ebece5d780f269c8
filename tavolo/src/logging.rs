//! Diagnostic logging to stderr.
//!
//! This is the tool's own diagnostic channel, controlled by verbosity
//! flags and the `TAVOLO_LOG_MODE` environment variable. It is unrelated
//! to the audit log, which is a domain artifact written to the data
//! directory.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the default log level.
pub const ENV_LOG_MODE: &str = "TAVOLO_LOG_MODE";

/// Verbosity level, ordered from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        };
        write!(f, "{name}")
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            other => Err(format!("invalid log level: {other}")),
        }
    }
}

/// A stderr logger that filters by level.
///
/// # Examples
///
/// ```
/// use tavolo::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("table board rebuilt from disk");
/// logger.debug("not printed at Normal");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, threshold: LogLevel, prefix: &str, message: &str) {
        if self.level >= threshold {
            eprintln!("{prefix}: {message}");
        }
    }

    /// Logs an error message (suppressed only when Quiet).
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Logs a warning message (suppressed only when Quiet).
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message (Verbose only).
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message (Verbose only).
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds a logger from CLI flags and the environment.
///
/// `verbose` wins over `quiet`; either flag wins over `TAVOLO_LOG_MODE`;
/// an unset or unparseable environment value falls back to Normal.
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }
    let level = env::var(ENV_LOG_MODE)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LogLevel::Normal);
    Logger::new(level)
}
