//! Session history command implementation.

use chrono::{DateTime, Local, NaiveTime, Utc};
use serde_json::json;

use crate::cli::args::{HistoryArgs, HistoryCommands, OutputFormat};
use crate::error::PomodoroError;
use crate::output::{format_history, HistorySummary};
use crate::storage::SessionLog;

/// Execute history subcommands.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or queried.
pub fn history(args: HistoryArgs, format: OutputFormat) -> Result<String, PomodoroError> {
    let log = SessionLog::new()?;

    match args.command {
        Some(HistoryCommands::Clear { force }) => clear_history(&log, force, format),
        None => list_history(&log, args.limit, format),
    }
}

fn list_history(
    log: &SessionLog,
    limit: usize,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    let sessions = log.recent(limit)?;
    let summary = summary_since(log, start_of_today())?;
    format_history(&sessions, &summary, format)
}

fn clear_history(
    log: &SessionLog,
    force: bool,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    if !force {
        return Err(PomodoroError::Config(
            "This will delete all session history.\nUse --force to confirm.".to_string(),
        ));
    }

    let removed = log.clear()?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({ "cleared": removed }))?),
        OutputFormat::Pretty => Ok(format!(
            "Session history cleared ({removed} session{}).",
            if removed == 1 { "" } else { "s" }
        )),
    }
}

/// Work totals for sessions finished at or after `since`.
fn summary_since(log: &SessionLog, since: DateTime<Utc>) -> Result<HistorySummary, PomodoroError> {
    let count = log.work_count_since(since)?;
    let minutes = log.work_minutes_since(since)?;

    Ok(HistorySummary {
        work_sessions: u32::try_from(count).unwrap_or(u32::MAX),
        work_minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
    })
}

/// Local midnight, in UTC.
fn start_of_today() -> DateTime<Utc> {
    Local::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .map_or_else(Utc::now, |midnight| midnight.with_timezone(&Utc))
}
