//! Human-readable output formatting for pomodoro.

use colored::{ColoredString, Colorize};

use crate::config::Config;
use crate::storage::LoggedSession;
use crate::timer::{format_minutes, render_progress_bar, Mode, Snapshot};

use super::HistorySummary;

const BAR_WIDTH: usize = 30;

/// Mode label colored by session type.
#[must_use]
pub fn mode_label(mode: Mode) -> ColoredString {
    match mode {
        Mode::Work => mode.display_name().red().bold(),
        Mode::ShortBreak => mode.display_name().green().bold(),
        Mode::LongBreak => mode.display_name().blue().bold(),
    }
}

/// Format a timer snapshot as a status block.
#[must_use]
pub fn format_snapshot_pretty(snapshot: &Snapshot) -> String {
    let state_icon = if snapshot.is_running { "▶️" } else { "⏸️" };
    let mut output = Vec::new();

    output.push(format!("{} {}", state_icon, mode_label(snapshot.mode)));
    output.push("─".repeat(40));
    output.push(format!(
        "Remaining: {}",
        snapshot.format_remaining().bold()
    ));
    output.push(format!(
        "Progress:  {} {:.0}%",
        render_progress_bar(snapshot.progress(), BAR_WIDTH),
        snapshot.progress() * 100.0
    ));
    output.push(format!(
        "Rounds:    {} (long break every {})",
        snapshot.rounds_completed, snapshot.config.rounds_before_long_break
    ));
    output.push(format!(
        "Running:   {}",
        if snapshot.is_running { "Yes" } else { "No" }
    ));

    output.join("\n")
}

/// One-line status for live sessions.
#[must_use]
pub fn format_snapshot_line(snapshot: &Snapshot) -> String {
    let paused = if snapshot.is_running {
        String::new()
    } else {
        format!(" {}", "(paused)".dimmed())
    };
    format!(
        "{} {} {} round {}{}",
        mode_label(snapshot.mode),
        snapshot.format_remaining().bold(),
        render_progress_bar(snapshot.progress(), 20),
        snapshot.rounds_completed,
        paused
    )
}

/// Format the configuration.
#[must_use]
pub fn format_config_pretty(config: &Config) -> String {
    let timer = config.timer.to_timer_config();
    let on_off = |flag: bool| if flag { "on".green() } else { "off".dimmed() };

    let mut output = Vec::new();
    output.push("⚙️  Pomodoro Settings".bold().to_string());
    output.push("─".repeat(40));
    output.push(format!("Work:        {}", format_minutes(timer.work_minutes)));
    output.push(format!(
        "Short break: {}",
        format_minutes(timer.short_break_minutes)
    ));
    output.push(format!(
        "Long break:  {}",
        format_minutes(timer.long_break_minutes)
    ));
    output.push(format!(
        "Long break every {} rounds",
        timer.rounds_before_long_break
    ));
    output.push(format!("Bell:        {}", on_off(config.alerts.bell)));
    output.push(format!("Desktop:     {}", on_off(config.alerts.desktop)));

    output.join("\n")
}

/// Format session history as a table.
#[must_use]
pub fn format_history_pretty(sessions: &[LoggedSession], summary: &HistorySummary) -> String {
    let mut output = Vec::new();
    output.push(format!(
        "Today: {} work session{}, {}",
        summary.work_sessions,
        if summary.work_sessions == 1 { "" } else { "s" },
        format_minutes(summary.work_minutes)
    ));
    output.push(String::new());

    if sessions.is_empty() {
        output.push("No finished sessions yet.\n\nStart one with: pomodoro run".to_string());
        return output.join("\n");
    }

    output.push("📋 Session History".bold().to_string());
    output.push("═".repeat(50));
    output.push(format!(
        "{:<17} {:<12} {:>8} {:>7}",
        "Finished", "Mode", "Length", "Round"
    ));
    output.push("─".repeat(50));

    for session in sessions {
        let finished = session
            .completed_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        output.push(format!(
            "{:<17} {:<12} {:>7}m {:>7}",
            finished,
            session.mode.display_name(),
            session.minutes,
            session.rounds_completed
        ));
    }

    output.join("\n")
}
