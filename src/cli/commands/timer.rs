//! One-shot timer commands.
//!
//! Each command restores the persisted timer, applies one action, and prints
//! the resulting status. The new state is saved by the timer itself.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::output::format_snapshot;
use crate::storage::{KeyValueStore, SqliteStore};
use crate::timer::{Scheduler, SessionTimer, TaskQueue};

/// Timer backed by the application database.
pub type PersistedTimer = SessionTimer<TaskQueue, SqliteStore>;

/// Restore the timer from the application database.
///
/// The config file durations are used only when no timer has been saved yet.
///
/// # Errors
///
/// Returns an error if the database cannot be opened.
pub fn open_timer(settings: &Config) -> Result<PersistedTimer, PomodoroError> {
    let store = SqliteStore::new()?;
    Ok(SessionTimer::new(
        TaskQueue::new(),
        store,
        settings.timer.to_timer_config(),
    ))
}

/// A single action applied to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Show the current session.
    Status,
    /// Start or resume.
    Start,
    /// Pause.
    Pause,
    /// Reset to a fresh work session.
    Reset,
    /// Move to the next session.
    Skip,
}

impl TimerAction {
    /// Apply the action and describe what happened.
    ///
    /// Returns `None` for actions that only read state.
    pub fn apply<S: Scheduler, K: KeyValueStore>(
        self,
        timer: &mut SessionTimer<S, K>,
    ) -> Option<String> {
        match self {
            Self::Status => None,
            Self::Start => {
                let was_running = timer.state().is_running;
                timer.start();
                Some(if was_running {
                    format!("{} session is already running", timer.mode())
                } else {
                    format!("Started {} session", timer.mode())
                })
            }
            Self::Pause => {
                let was_running = timer.state().is_running;
                timer.pause();
                Some(if was_running {
                    format!("Paused {} session", timer.mode())
                } else {
                    "Timer is not running".to_string()
                })
            }
            Self::Reset => {
                timer.reset();
                Some("Timer reset".to_string())
            }
            Self::Skip => {
                let from = timer.mode();
                timer.skip();
                Some(format!("Skipped {from}, now {}", timer.mode()))
            }
        }
    }
}

/// Execute a one-shot timer command.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or output formatting fails.
pub fn timer_command(
    settings: &Config,
    action: TimerAction,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    let mut timer = open_timer(settings)?;
    run_action(&mut timer, action, format)
}

fn run_action<S: Scheduler, K: KeyValueStore>(
    timer: &mut SessionTimer<S, K>,
    action: TimerAction,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    let message = action.apply(timer);
    let status = format_snapshot(&timer.snapshot(), format)?;

    match (format, message) {
        (OutputFormat::Pretty, Some(message)) => {
            Ok(format!("{} {}\n\n{}", "✓".green(), message, status))
        }
        _ => Ok(status),
    }
}
