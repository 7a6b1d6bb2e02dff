//! JSON output formatting for pomodoro.

use serde::Serialize;
use serde_json::json;

use crate::error::PomodoroError;
use crate::storage::LoggedSession;
use crate::timer::Snapshot;

use super::HistorySummary;

/// Format a timer snapshot as JSON, with derived display fields.
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_snapshot_json(snapshot: &Snapshot) -> Result<String, PomodoroError> {
    let output = json!({
        "mode": snapshot.mode,
        "label": snapshot.mode.display_name(),
        "secondsLeft": snapshot.seconds_left,
        "remaining": snapshot.format_remaining(),
        "progress": snapshot.progress(),
        "isRunning": snapshot.is_running,
        "roundsCompleted": snapshot.rounds_completed,
        "config": snapshot.config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format session history as JSON.
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_history_json(
    sessions: &[LoggedSession],
    summary: &HistorySummary,
) -> Result<String, PomodoroError> {
    let output = json!({
        "today": summary,
        "count": sessions.len(),
        "items": sessions,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value to pretty JSON.
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomodoroError> {
    Ok(serde_json::to_string_pretty(value)?)
}
