//! Error types for pomodoro.

use thiserror::Error;

/// Errors surfaced by the pomodoro library and CLI.
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// A key-value store operation failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized data could not be parsed or produced.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
