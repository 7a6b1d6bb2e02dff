use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A Pomodoro session timer for the terminal")]
#[command(long_about = "pomodoro - A Pomodoro session timer for the terminal

Cycles through work sessions, short breaks and long breaks. The timer
state is saved after every change, so one-shot commands and live
sessions pick up where the last one left off.

QUICK START:
  pomodoro run              Run a live session in this terminal
  pomodoro status           Show the current session
  pomodoro skip             Jump to the next session
  pomodoro config set --work 50   Use 50 minute work sessions

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomodoro <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current session
    ///
    /// Displays the mode, time remaining, progress, completed rounds,
    /// and whether the timer is running.
    #[command(alias = "st")]
    Status,

    /// Start or resume the countdown
    Start,

    /// Pause the countdown
    Pause,

    /// Reset to a stopped work session with no completed rounds
    Reset,

    /// Skip to the next session
    ///
    /// Skipping a work session counts it as a completed round.
    #[command(alias = "next")]
    Skip,

    /// Run a live session in this terminal
    ///
    /// Ticks in real time, rings an alert when a session runs out, and
    /// moves on to the next session automatically.
    ///
    /// While running, type a command and press enter:
    ///
    ///   s  start      p  pause      r  reset
    ///   k  skip       q  quit
    Run {
        /// Start the countdown right away
        #[arg(long, short = 's')]
        start: bool,
    },

    /// Show or change session lengths and alerts
    ///
    /// # Examples
    ///
    ///   pomodoro config show
    ///   pomodoro config set --work 50 --short 10
    ///   pomodoro config set --rounds 3 --desktop false
    Config(ConfigArgs),

    /// Show finished sessions
    ///
    /// # Examples
    ///
    ///   pomodoro history
    ///   pomodoro history --limit 20
    ///   pomodoro history clear --force
    History(HistoryArgs),

    /// Generate shell completions
    ///
    /// Example: pomodoro completions zsh > ~/.zsh/completions/_pomodoro
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for configuration.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Change configuration values
    ///
    /// Values below 1 are raised to 1. Changing a session length restarts
    /// the current session at its new length.
    Set {
        /// Work session length in minutes
        #[arg(long, short = 'w', allow_negative_numbers = true)]
        work: Option<i64>,

        /// Short break length in minutes
        #[arg(long, short = 's', allow_negative_numbers = true)]
        short: Option<i64>,

        /// Long break length in minutes
        #[arg(long, short = 'l', allow_negative_numbers = true)]
        long: Option<i64>,

        /// Work sessions before a long break
        #[arg(long, short = 'r', allow_negative_numbers = true)]
        rounds: Option<i64>,

        /// Ring the terminal bell on expiry
        #[arg(long)]
        bell: Option<bool>,

        /// Show a desktop notification on expiry
        #[arg(long)]
        desktop: Option<bool>,
    },
}

/// Arguments for history.
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: Option<HistoryCommands>,

    /// Number of sessions to show
    #[arg(long, short = 'n', default_value = "10")]
    pub limit: usize,
}

/// History subcommands.
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Delete all session history
    Clear {
        /// Confirm deletion
        #[arg(long, short = 'f')]
        force: bool,
    },
}
