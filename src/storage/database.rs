//! `SQLite` database connection and operations.
//!
//! The database is stored at `~/.pomodoro/pomodoro.db` and contains tables for:
//! - The key-value store holding the timer record
//! - Session history

use rusqlite::Connection;

use crate::config::Paths;
use crate::error::PomodoroError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the default location.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open() -> Result<Self, PomodoroError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, PomodoroError> {
        let conn = Connection::open(path).map_err(|e| {
            PomodoroError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        Self::from_connection(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, PomodoroError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            PomodoroError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, PomodoroError> {
        // Another process (a live `run` next to a one-shot command) may hold the lock briefly.
        conn.busy_timeout(std::time::Duration::from_secs(2))
            .map_err(|e| PomodoroError::Database(format!("Failed to set busy timeout: {e}")))?;

        let db = Self { conn };
        migrations::run(&db.conn)?;
        Ok(db)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, PomodoroError> {
        migrations::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
