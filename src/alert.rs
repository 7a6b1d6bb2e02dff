//! Expiry alerts: terminal bell and desktop notification.

use std::io::{Stderr, Write};

use log::warn;
use notify_rust::Notification as DesktopNotification;

use crate::config::AlertConfig;
use crate::timer::{Listener, Mode, Notification};

/// Rings the bell and shows a desktop notification when a session runs out.
///
/// The bell goes to stderr by default so it never lands inside status output
/// written to stdout.
#[derive(Debug)]
pub struct Alert<W: Write = Stderr> {
    bell: bool,
    desktop: bool,
    bell_out: W,
}

impl Alert {
    /// Create an alert from the config file settings.
    #[must_use]
    pub fn new(config: &AlertConfig) -> Self {
        Self::with_bell_output(config, std::io::stderr())
    }
}

impl<W: Write> Alert<W> {
    /// Create an alert that rings the bell on `bell_out`.
    pub const fn with_bell_output(config: &AlertConfig, bell_out: W) -> Self {
        Self {
            bell: config.bell,
            desktop: config.desktop,
            bell_out,
        }
    }

    fn ring_bell(&mut self) {
        let result = self
            .bell_out
            .write_all(b"\x07")
            .and_then(|()| self.bell_out.flush());
        if let Err(e) = result {
            warn!("Failed to ring bell: {e}");
        }
    }

    fn show_desktop(message: &str) {
        let result = DesktopNotification::new()
            .summary("Pomodoro")
            .body(message)
            .show();

        if let Err(e) = result {
            warn!("Failed to send desktop notification: {e}");
        }
    }
}

/// Message shown when a session of `mode` lasting `minutes` runs out.
#[must_use]
pub fn expiry_message(mode: Mode, minutes: u32) -> String {
    match mode {
        Mode::Work => format!("Work session complete ({minutes} min). Time for a break!"),
        Mode::ShortBreak | Mode::LongBreak => {
            format!("{mode} is over ({minutes} min). Back to work!")
        }
    }
}

impl<W: Write> Listener for Alert<W> {
    fn notify(&mut self, notification: &Notification) {
        let Notification::Expired { mode, minutes, .. } = *notification else {
            return;
        };

        if self.bell {
            self.ring_bell();
        }
        if self.desktop {
            Self::show_desktop(&expiry_message(mode, minutes));
        }
    }
}
