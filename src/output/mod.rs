//! Output formatting for pomodoro.
//!
//! This module provides formatters for displaying timer data in various formats.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::storage::LoggedSession;
use crate::timer::Snapshot;

pub use json::*;
pub use pretty::*;

/// Work done today, shown above the history table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    /// Work sessions finished today.
    pub work_sessions: u32,
    /// Minutes of work finished today.
    pub work_minutes: u32,
}

/// Format a timer snapshot based on output format
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_snapshot_pretty(snapshot)),
        OutputFormat::Json => format_snapshot_json(snapshot),
    }
}

/// Format the configuration based on output format
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config)),
        OutputFormat::Json => to_json(config),
    }
}

/// Format session history based on output format
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_history(
    sessions: &[LoggedSession],
    summary: &HistorySummary,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions, summary)),
        OutputFormat::Json => format_history_json(sessions, summary),
    }
}
