//! Storage layer for pomodoro.
//!
//! This module provides:
//! - The key-value store the timer persists its record into
//! - SQLite-based persistence for the store and for session history

mod database;
mod history;
mod kv;
mod migrations;

pub use database::Database;
pub use history::{LoggedSession, SessionLog};
#[cfg(test)]
pub use kv::MockKeyValueStore;
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
