//! Configuration settings for pomodoro.
//!
//! Settings are loaded from `~/.pomodoro/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PomodoroError;
use crate::timer::config::clamp_minutes;
use crate::timer::TimerConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Session lengths.
    pub timer: TimerSettings,
    /// Expiry alert settings.
    pub alerts: AlertConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Session lengths as written in the config file.
///
/// Values are kept signed so that zero or negative entries can be clamped
/// instead of failing the whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Work session length in minutes.
    #[serde(default = "default_work")]
    pub work_minutes: i64,
    /// Short break length in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: i64,
    /// Long break length in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: i64,
    /// Number of work sessions before a long break.
    #[serde(default = "default_rounds")]
    pub rounds_before_long_break: i64,
}

/// What happens when a session runs out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Ring the terminal bell.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// Show a desktop notification.
    #[serde(default = "default_true")]
    pub desktop: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_work() -> i64 {
    25
}

const fn default_short_break() -> i64 {
    5
}

const fn default_long_break() -> i64 {
    15
}

const fn default_rounds() -> i64 {
    4
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            rounds_before_long_break: default_rounds(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            bell: default_true(),
            desktop: default_true(),
        }
    }
}

impl TimerSettings {
    /// Convert to a timer configuration, clamping each value to at least one.
    #[must_use]
    pub fn to_timer_config(&self) -> TimerConfig {
        TimerConfig::new(
            clamp_minutes(self.work_minutes),
            clamp_minutes(self.short_break_minutes),
            clamp_minutes(self.long_break_minutes),
            clamp_minutes(self.rounds_before_long_break),
        )
    }
}

impl From<TimerConfig> for TimerSettings {
    fn from(config: TimerConfig) -> Self {
        Self {
            work_minutes: i64::from(config.work_minutes),
            short_break_minutes: i64::from(config.short_break_minutes),
            long_break_minutes: i64::from(config.long_break_minutes),
            rounds_before_long_break: i64::from(config.rounds_before_long_break),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomodoroError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomodoroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), PomodoroError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomodoroError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomodoroError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
