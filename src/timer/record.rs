//! The persisted form of a timer.

use log::warn;
use serde::{Deserialize, Serialize};

use super::config::TimerConfig;
use super::mode::Mode;
use super::state::SessionState;

/// Store key under which the timer record lives.
pub const STATE_KEY: &str = "pomodoro-state";

/// Everything needed to rebuild a timer, as one JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRecord {
    /// Current session type.
    pub mode: Mode,
    /// Seconds remaining in the current session.
    pub seconds_left: u32,
    /// Whether the countdown was ticking.
    pub is_running: bool,
    /// Rounds completed since the last reset.
    pub rounds_completed: u32,
    /// Configuration in effect.
    pub config: TimerConfig,
}

impl TimerRecord {
    /// Capture state and config.
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

    /// Parse a stored record.
    ///
    /// Returns `None` for anything that is not a well-formed record; a bad
    /// record means there is no prior state.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring malformed timer record: {e}");
                None
            }
        }
    }

    /// Split into state and config, clamping both into range.
    #[must_use]
    pub fn into_parts(self) -> (SessionState, TimerConfig) {
        let config = self.config.clamped();
        let mut state = SessionState {
            mode: self.mode,
            seconds_left: self.seconds_left,
            is_running: self.is_running,
            rounds_completed: self.rounds_completed,
        };
        state.clamp_to(&config);
        (state, config)
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
