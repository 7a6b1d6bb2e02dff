//! Countdown formatting helpers.

/// Format seconds as MM:SS.
///
/// Minutes are not wrapped into hours, so a 90 minute session reads `90:00`.
#[must_use]
pub fn format_seconds_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a minute count as a human-readable string.
#[must_use]
pub fn format_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let plural = |n: u32| if n == 1 { "" } else { "s" };

    if hours == 0 {
        return format!("{minutes} minute{}", plural(minutes));
    }
    if minutes == 0 {
        return format!("{hours} hour{}", plural(hours));
    }
    format!(
        "{hours} hour{}, {minutes} minute{}",
        plural(hours),
        plural(minutes)
    )
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
