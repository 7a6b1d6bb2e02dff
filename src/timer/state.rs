//! Mutable session state and the snapshots handed to observers.

use serde::{Deserialize, Serialize};

use super::config::TimerConfig;
use super::format::format_seconds_mmss;
use super::mode::Mode;

/// The countdown's mutable core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Current session type.
    pub mode: Mode,
    /// Seconds remaining in the current session.
    pub seconds_left: u32,
    /// Whether the countdown is ticking.
    pub is_running: bool,
    /// Work sessions finished or skipped since the last reset.
    pub rounds_completed: u32,
}

impl SessionState {
    /// A stopped Work session at full length.
    #[must_use]
    pub const fn fresh(config: &TimerConfig) -> Self {
        Self {
            mode: Mode::Work,
            seconds_left: config.duration_for(Mode::Work),
            is_running: false,
            rounds_completed: 0,
        }
    }

    /// Move to the session that follows the current one.
    ///
    /// Finishing a Work session counts a round; every
    /// `rounds_before_long_break`-th round is followed by a long break.
    /// Returns the new mode.
    pub fn advance(&mut self, config: &TimerConfig) -> Mode {
        let next = match self.mode {
            Mode::Work => {
                self.rounds_completed = self.rounds_completed.saturating_add(1);
                if self.rounds_completed % config.rounds_before_long_break == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Work,
        };

        self.mode = next;
        self.seconds_left = config.duration_for(next);
        next
    }

    /// Pull `seconds_left` back into `[0, duration_for(mode)]`.
    pub fn clamp_to(&mut self, config: &TimerConfig) {
        self.seconds_left = self.seconds_left.min(config.duration_for(self.mode));
    }
}

/// Read-only view of the timer at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Current session type.
    pub mode: Mode,
    /// Seconds remaining in the current session.
    pub seconds_left: u32,
    /// Whether the countdown is ticking.
    pub is_running: bool,
    /// Work sessions finished or skipped since the last reset.
    pub rounds_completed: u32,
    /// Configuration in effect.
    pub config: TimerConfig,
}

impl Snapshot {
    /// Build a snapshot from state and config.
    #[must_use]
    pub const fn new(state: &SessionState, config: &TimerConfig) -> Self {
        Self {
            mode: state.mode,
            seconds_left: state.seconds_left,
            is_running: state.is_running,
            rounds_completed: state.rounds_completed,
            config: *config,
        }
    }

    /// Full length of the current session in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.config.duration_for(self.mode)
    }

    /// Fraction of the current session already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.total_seconds();
        if total == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.seconds_left) / f64::from(total)
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_seconds_mmss(self.seconds_left)
    }
}
