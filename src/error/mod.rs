//! Structured error handling for wedit.
//! Defines error kinds, severity levels, and a common Result alias.

use std::fmt;

/// How serious an error is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Operation failed but the editor continues (reported via the status line).
    Error,
    /// Unrecoverable — terminal state is restored and the process exits.
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File load/save, `:run` pipe, terminal I/O.
    Io,
    /// Ex command / address / pattern parsing.
    Parse,
    /// A command ran but failed (bad substitute, no match, unknown command).
    Execution,
    /// Invariant violation in the editing engine itself.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Parse => write!(f, "Parse"),
            Self::Execution => write!(f, "Execution"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in wedit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorError {
    pub severity: ErrorSeverity,
    pub kind: ErrorKind,
    pub code: &'static str,
    pub message: String,
}

impl EditorError {
    /// A recoverable error (reported via the status line).
    pub fn new(kind: ErrorKind, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code,
            message: message.into(),
        }
    }

    /// A fatal error — caller should restore terminal state and exit.
    pub fn critical(kind: ErrorKind, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for EditorError {}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, "IO_ERROR", err.to_string())
    }
}

/// Result alias for wedit operations.
pub type Result<T> = std::result::Result<T, EditorError>;

pub mod codes {
    pub const NO_FILENAME: &str = "NO_FILENAME";
    pub const WRITE_FAILED: &str = "WRITE_FAILED";
    pub const FSYNC_FAILED: &str = "FSYNC_FAILED";
    pub const RENAME_FAILED: &str = "RENAME_FAILED";
    pub const READ_FAILED: &str = "READ_FAILED";
    pub const STAT_FAILED: &str = "STAT_FAILED";
    pub const DIRTY_QUIT: &str = "DIRTY_QUIT";
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const BAD_SUBSTITUTE: &str = "BAD_SUBSTITUTE";
    pub const EMPTY_PATTERN: &str = "EMPTY_PATTERN";
    pub const NO_MATCH: &str = "NO_MATCH";
    pub const NO_PREVIOUS_SEARCH: &str = "NO_PREVIOUS_SEARCH";
    pub const PATTERN_NOT_FOUND: &str = "PATTERN_NOT_FOUND";
    pub const UNKNOWN_MOTION: &str = "UNKNOWN_MOTION";
    pub const UNKNOWN_TEXTOBJ: &str = "UNKNOWN_TEXTOBJ";
    pub const FIND_CANCELLED: &str = "FIND_CANCELLED";
    pub const RUN_FAILED: &str = "RUN_FAILED";
    pub const RUN_NO_OUTPUT: &str = "RUN_NO_OUTPUT";
    pub const TERMINAL_INIT: &str = "TERMINAL_INIT";
}
