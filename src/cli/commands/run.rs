//! Live session command.
//!
//! Drives the persisted timer in real time on a single-threaded tokio
//! runtime. Wall-clock time since startup is fed to the timer's task queue,
//! so ticks and the settle delay fire exactly as they do under test.

use std::io::Write;

use chrono::Local;
use colored::Colorize;
use log::{debug, info, warn};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;

use crate::alert::{expiry_message, Alert};
use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::output::{format_snapshot, format_snapshot_line, mode_label};
use crate::storage::{KeyValueStore, SessionLog};
use crate::timer::{Listener, Mode, Notification, Scheduler, SessionTimer, Snapshot};

use super::timer::open_timer;

const HELP: &str = "Commands: s start, p pause, r reset, k skip, q quit";

/// A line typed while a live session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveCommand {
    /// Start or resume.
    Start,
    /// Pause.
    Pause,
    /// Reset to a fresh work session.
    Reset,
    /// Move to the next session.
    Skip,
    /// End the live session.
    Quit,
}

impl LiveCommand {
    /// Parse a typed line. Accepts single letters or full words.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "s" | "start" => Some(Self::Start),
            "p" | "pause" => Some(Self::Pause),
            "r" | "reset" => Some(Self::Reset),
            "k" | "skip" | "n" | "next" => Some(Self::Skip),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Apply to the timer. Returns `false` when the session should end.
    pub fn apply<S: Scheduler, K: KeyValueStore>(self, timer: &mut SessionTimer<S, K>) -> bool {
        match self {
            Self::Start => timer.start(),
            Self::Pause => timer.pause(),
            Self::Reset => timer.reset(),
            Self::Skip => timer.skip(),
            Self::Quit => return false,
        }
        true
    }
}

/// Prints timer updates as they happen.
///
/// Pretty output rewrites a single status line and logs mode changes with a
/// timestamp. JSON output writes one object per line.
pub struct ConsolePrinter<W: Write> {
    out: W,
    format: OutputFormat,
    last_mode: Option<Mode>,
}

impl<W: Write> ConsolePrinter<W> {
    /// Create a printer writing to `out`.
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            last_mode: None,
        }
    }

    /// The underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    fn write_update(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let line = json!({ "event": "update", "status": snapshot });
                writeln!(self.out, "{line}")?;
            }
            OutputFormat::Pretty => {
                if self.last_mode.is_some_and(|mode| mode != snapshot.mode) {
                    writeln!(
                        self.out,
                        "\n{} Now: {}",
                        Local::now().format("[%H:%M:%S]").to_string().dimmed(),
                        mode_label(snapshot.mode)
                    )?;
                }
                // \x1b[K clears what is left of a longer previous line
                write!(self.out, "\r{}\x1b[K", format_snapshot_line(snapshot))?;
            }
        }
        self.last_mode = Some(snapshot.mode);
        self.out.flush()
    }

    fn write_expired(&mut self, mode: Mode, minutes: u32, rounds_completed: u32) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let line = json!({
                    "event": "expired",
                    "mode": mode,
                    "minutes": minutes,
                    "roundsCompleted": rounds_completed,
                });
                writeln!(self.out, "{line}")?;
            }
            OutputFormat::Pretty => {
                writeln!(
                    self.out,
                    "\n{} {}",
                    Local::now().format("[%H:%M:%S]").to_string().dimmed(),
                    expiry_message(mode, minutes).bold()
                )?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Listener for ConsolePrinter<W> {
    fn notify(&mut self, notification: &Notification) {
        let result = match *notification {
            Notification::Update(snapshot) => self.write_update(&snapshot),
            Notification::Expired {
                mode,
                minutes,
                rounds_completed,
            } => self.write_expired(mode, minutes, rounds_completed),
        };

        if let Err(e) = result {
            warn!("Failed to write status: {e}");
        }
    }
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the runtime cannot start, the database cannot be
/// opened, or stdin cannot be read.
pub fn run(settings: &Config, start: bool, format: OutputFormat) -> Result<String, PomodoroError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(live_session(settings, start, format))
}

async fn live_session(
    settings: &Config,
    start: bool,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    let origin = Instant::now();
    let mut timer = open_timer(settings)?;
    timer.add_listener(ConsolePrinter::new(std::io::stdout(), format));
    timer.add_listener(Alert::new(&settings.alerts));
    timer.add_listener(SessionLog::new()?);

    if format == OutputFormat::Pretty {
        println!("{}", HELP.dimmed());
    }
    print_initial(&timer.snapshot(), format)?;
    if start {
        timer.start();
    }

    info!("Live session started");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let deadline = timer.scheduler().next_due().map(|due| origin + due);

        tokio::select! {
            () = sleep_until(deadline) => {
                timer.advance_to(origin.elapsed());
            }

            line = lines.next_line(), if stdin_open => {
                timer.advance_to(origin.elapsed());
                match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => match LiveCommand::parse(&line) {
                        Some(command) => {
                            debug!("Live command {command:?}");
                            if !command.apply(&mut timer) {
                                break;
                            }
                        }
                        None => eprintln!("\n{}", HELP.yellow()),
                    },
                    None => {
                        debug!("stdin closed, ticking until interrupted");
                        stdin_open = false;
                    }
                }
            }

            result = &mut ctrl_c => {
                result?;
                info!("Interrupted");
                break;
            }
        }
    }

    timer.teardown();
    info!("Live session ended");

    match format {
        OutputFormat::Json => format_snapshot(&timer.snapshot(), format),
        OutputFormat::Pretty => Ok(format!(
            "\n{}",
            "Timer saved. Run 'pomodoro run' to pick up where you left off.".dimmed()
        )),
    }
}

fn print_initial(snapshot: &Snapshot, format: OutputFormat) -> Result<(), PomodoroError> {
    let mut printer = ConsolePrinter::new(std::io::stdout(), format);
    printer.write_update(snapshot)?;
    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
