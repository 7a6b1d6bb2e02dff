//! pomodoro - A Pomodoro session timer for the terminal
//!
//! This crate provides a work/break countdown state machine with injected
//! scheduling and storage, plus a command-line front end that persists the
//! timer to SQLite between runs.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod alert;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod timer;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomodoroError;
pub use timer::{SessionTimer, TimerConfig};
