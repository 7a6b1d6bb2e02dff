//! Configuration command implementation.

use log::info;
use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths, TimerSettings};
use crate::error::PomodoroError;
use crate::output::{format_config, format_config_pretty};

use super::timer::open_timer;

/// Values passed to `config set`. `None` leaves a setting unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigChanges {
    /// Work session length in minutes.
    pub work: Option<i64>,
    /// Short break length in minutes.
    pub short: Option<i64>,
    /// Long break length in minutes.
    pub long: Option<i64>,
    /// Work sessions before a long break.
    pub rounds: Option<i64>,
    /// Ring the terminal bell on expiry.
    pub bell: Option<bool>,
    /// Show a desktop notification on expiry.
    pub desktop: Option<bool>,
}

impl ConfigChanges {
    const fn is_empty(&self) -> bool {
        self.work.is_none()
            && self.short.is_none()
            && self.long.is_none()
            && self.rounds.is_none()
            && self.bell.is_none()
            && self.desktop.is_none()
    }

    const fn touches_timer(&self) -> bool {
        self.work.is_some() || self.short.is_some() || self.long.is_some() || self.rounds.is_some()
    }

    /// Apply the changes, clamping durations to at least one.
    pub fn apply_to(&self, settings: &mut Config) {
        let timer = &mut settings.timer;
        if let Some(work) = self.work {
            timer.work_minutes = work;
        }
        if let Some(short) = self.short {
            timer.short_break_minutes = short;
        }
        if let Some(long) = self.long {
            timer.long_break_minutes = long;
        }
        if let Some(rounds) = self.rounds {
            timer.rounds_before_long_break = rounds;
        }
        settings.timer = TimerSettings::from(settings.timer.to_timer_config());

        if let Some(bell) = self.bell {
            settings.alerts.bell = bell;
        }
        if let Some(desktop) = self.desktop {
            settings.alerts.desktop = desktop;
        }
    }
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or if the
/// timer database cannot be opened.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, PomodoroError> {
    let paths = Paths::new()?;
    let mut settings = Config::load_from_path(&paths.config_file)?;

    match cmd {
        ConfigCommands::Show => format_config(&settings, format),
        ConfigCommands::Set {
            work,
            short,
            long,
            rounds,
            bell,
            desktop,
        } => {
            let changes = ConfigChanges {
                work,
                short,
                long,
                rounds,
                bell,
                desktop,
            };
            if changes.is_empty() {
                return Err(PomodoroError::Config(
                    "Nothing to change.\nUse --work, --short, --long, --rounds, --bell or --desktop."
                        .to_string(),
                ));
            }

            changes.apply_to(&mut settings);
            paths.ensure_dirs()?;
            settings.save_to_path(&paths.config_file)?;
            info!("Saved config to {}", paths.config_file.display());

            if changes.touches_timer() {
                let mut timer = open_timer(&settings)?;
                timer.set_configuration(settings.timer.to_timer_config());
            }

            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                    "saved": paths.config_file,
                    "config": settings,
                }))?),
                OutputFormat::Pretty => Ok(format!(
                    "Saved {}\n\n{}",
                    paths.config_file.display(),
                    format_config_pretty(&settings)
                )),
            }
        }
    }
}
