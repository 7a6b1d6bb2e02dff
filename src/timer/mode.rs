//! Session modes.

use serde::{Deserialize, Serialize};

/// Type of session the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Focused work session
    #[default]
    #[serde(rename = "work")]
    Work,
    /// Short break between work sessions
    #[serde(rename = "short")]
    ShortBreak,
    /// Long break after a full set of rounds
    #[serde(rename = "long")]
    LongBreak,
}

impl Mode {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Short identifier used in the persisted record and the history table.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short",
            Self::LongBreak => "long",
        }
    }

    /// Parse a mode from its short identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "work" => Some(Self::Work),
            "short" => Some(Self::ShortBreak),
            "long" => Some(Self::LongBreak),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serializes_short_names() {
        assert_eq!(serde_json::to_string(&Mode::Work).unwrap(), "\"work\"");
        assert_eq!(serde_json::to_string(&Mode::ShortBreak).unwrap(), "\"short\"");
        assert_eq!(serde_json::to_string(&Mode::LongBreak).unwrap(), "\"long\"");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("work"), Some(Mode::Work));
        assert_eq!(Mode::parse("SHORT"), Some(Mode::ShortBreak));
        assert_eq!(Mode::parse("long"), Some(Mode::LongBreak));
        assert_eq!(Mode::parse("lb"), None);
        assert_eq!(Mode::parse("nap"), None);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::ShortBreak.to_string(), "Short Break");
    }
}
