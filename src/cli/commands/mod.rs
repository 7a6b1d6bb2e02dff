//! Command implementations for pomodoro.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod history;
mod run;
mod timer;

pub use config::{config, ConfigChanges};
pub use history::history;
pub use run::{run, ConsolePrinter, LiveCommand};
pub use timer::{open_timer, timer_command, PersistedTimer, TimerAction};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PomodoroError;

/// Generate a shell completion script.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PomodoroError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomodoro", &mut buf);
    String::from_utf8(buf).map_err(|e| PomodoroError::Config(format!("UTF-8 error: {e}")))
}
