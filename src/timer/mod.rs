//! Pomodoro session timer.
//!
//! Provides the countdown state machine and its collaborators:
//! - Work / short break / long break cycling with a long-break cadence
//! - Virtual-time scheduling of ticks and the post-expiry settle delay
//! - Persistence of the full timer record after every change
//! - Update and expiry notifications for observers

pub mod config;
pub mod format;
pub mod mode;
pub mod notify;
pub mod record;
pub mod scheduler;
pub mod session;
pub mod state;

pub use config::TimerConfig;
pub use format::{format_minutes, format_seconds_mmss, render_progress_bar};
pub use mode::Mode;
pub use notify::{Listener, Notification};
pub use record::{TimerRecord, STATE_KEY};
pub use scheduler::{DueTask, Scheduler, Task, TaskId, TaskQueue, SETTLE_DELAY, TICK_INTERVAL};
pub use session::SessionTimer;
pub use state::{SessionState, Snapshot};
