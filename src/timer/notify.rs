//! Notifications emitted by the timer.

use super::mode::Mode;
use super::state::Snapshot;

/// Something observers may want to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// State changed; carries the new state.
    Update(Snapshot),
    /// A session ran out naturally. Sent before the mode switches.
    Expired {
        /// The session that just finished.
        mode: Mode,
        /// Its configured length in minutes.
        minutes: u32,
        /// Rounds completed before this session is counted.
        rounds_completed: u32,
    },
}

/// Receives timer notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Listener {
    /// Handle a notification. Must not block.
    fn notify(&mut self, notification: &Notification);
}

impl<F> Listener for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification);
    }
}
