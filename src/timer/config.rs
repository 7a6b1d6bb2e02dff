//! Timer durations and round settings.

use serde::{Deserialize, Deserializer, Serialize};

use super::mode::Mode;

/// Smallest accepted value for any duration or round count.
pub const MIN_VALUE: u32 = 1;

/// Session lengths and the long-break cadence.
///
/// Durations are whole minutes. Every field is at least [`MIN_VALUE`]; values
/// below it are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerConfig {
    /// Work session length in minutes.
    #[serde(deserialize_with = "clamped")]
    pub work_minutes: u32,
    /// Short break length in minutes.
    #[serde(deserialize_with = "clamped")]
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    #[serde(deserialize_with = "clamped")]
    pub long_break_minutes: u32,
    /// Completed work sessions between long breaks.
    #[serde(deserialize_with = "clamped")]
    pub rounds_before_long_break: u32,
}

impl TimerConfig {
    /// Create a config, clamping every value to at least one.
    #[must_use]
    pub const fn new(
        work_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
        rounds_before_long_break: u32,
    ) -> Self {
        Self {
            work_minutes,
            short_break_minutes,
            long_break_minutes,
            rounds_before_long_break,
        }
        .clamped()
    }

    /// Return a copy with every value raised to at least one.
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            work_minutes: clamp_min(self.work_minutes),
            short_break_minutes: clamp_min(self.short_break_minutes),
            long_break_minutes: clamp_min(self.long_break_minutes),
            rounds_before_long_break: clamp_min(self.rounds_before_long_break),
        }
    }

    /// Configured length of `mode` in minutes.
    #[must_use]
    pub const fn minutes_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured length of `mode` in seconds.
    #[must_use]
    pub const fn duration_for(&self, mode: Mode) -> u32 {
        self.minutes_for(mode).saturating_mul(60)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            rounds_before_long_break: 4,
        }
    }
}

const fn clamp_min(value: u32) -> u32 {
    if value < MIN_VALUE {
        MIN_VALUE
    } else {
        value
    }
}

/// Clamp a possibly zero or negative integer into `[1, u32::MAX]`.
#[must_use]
pub fn clamp_minutes(value: i64) -> u32 {
    u32::try_from(value.max(i64::from(MIN_VALUE))).unwrap_or(u32::MAX)
}

fn clamped<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_minutes)
}
