//! Session history.
//!
//! Sessions that run out naturally are appended to the `session_log` table.
//! Skipped sessions are not recorded.

use chrono::{DateTime, Utc};
use log::warn;
use rusqlite::{params, Row};
use serde::Serialize;

use crate::error::PomodoroError;
use crate::timer::{Listener, Mode, Notification};

use super::Database;

/// One finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedSession {
    /// Row id.
    pub id: i64,
    /// Session type.
    pub mode: Mode,
    /// Configured length in minutes.
    pub minutes: u32,
    /// Work rounds completed including this one.
    pub rounds_completed: u32,
    /// When the session ran out.
    pub completed_at: DateTime<Utc>,
}

/// Storage for finished sessions.
pub struct SessionLog {
    db: Database,
}

impl SessionLog {
    /// Open the log in the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, PomodoroError> {
        Ok(Self {
            db: Database::open()?,
        })
    }

    /// Create a log on an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Append a finished session.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record(
        &self,
        mode: Mode,
        minutes: u32,
        rounds_completed: u32,
        completed_at: DateTime<Utc>,
    ) -> Result<i64, PomodoroError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO session_log (mode, minutes, rounds_completed, completed_at)
              VALUES (?1, ?2, ?3, ?4)",
            params![
                mode.as_str(),
                minutes,
                rounds_completed,
                completed_at.to_rfc3339()
            ],
        )
        .map_err(|e| PomodoroError::Database(format!("Failed to record session: {e}")))?;

        Ok(conn.last_insert_rowid())
    }

    /// Most recent sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<LoggedSession>, PomodoroError> {
        let mut stmt = self
            .db
            .connection()
            .prepare(
                r"SELECT id, mode, minutes, rounds_completed, completed_at
                  FROM session_log
                  ORDER BY completed_at DESC, id DESC
                  LIMIT ?1",
            )
            .map_err(|e| PomodoroError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_session)
            .map_err(|e| PomodoroError::Database(format!("Failed to query sessions: {e}")))?;

        rows.map(|row| row.map_err(|e| PomodoroError::Database(e.to_string())))
            .collect()
    }

    /// Number of work sessions finished since `since`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn work_count_since(&self, since: DateTime<Utc>) -> Result<i64, PomodoroError> {
        self.db
            .connection()
            .query_row(
                r"SELECT COUNT(*) FROM session_log
                  WHERE mode = 'work' AND completed_at >= ?1",
                [since.to_rfc3339()],
                |row| row.get(0),
            )
            .map_err(|e| PomodoroError::Database(format!("Failed to count sessions: {e}")))
    }

    /// Total work minutes finished since `since`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn work_minutes_since(&self, since: DateTime<Utc>) -> Result<i64, PomodoroError> {
        self.db
            .connection()
            .query_row(
                r"SELECT COALESCE(SUM(minutes), 0) FROM session_log
                  WHERE mode = 'work' AND completed_at >= ?1",
                [since.to_rfc3339()],
                |row| row.get(0),
            )
            .map_err(|e| PomodoroError::Database(format!("Failed to sum sessions: {e}")))
    }

    /// Delete all history. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<usize, PomodoroError> {
        self.db
            .connection()
            .execute("DELETE FROM session_log", [])
            .map_err(|e| PomodoroError::Database(format!("Failed to clear sessions: {e}")))
    }
}

impl Listener for SessionLog {
    fn notify(&mut self, notification: &Notification) {
        let Notification::Expired {
            mode,
            minutes,
            rounds_completed,
        } = *notification
        else {
            return;
        };

        let rounds = if mode == Mode::Work {
            rounds_completed.saturating_add(1)
        } else {
            rounds_completed
        };

        if let Err(e) = self.record(mode, minutes, rounds, Utc::now()) {
            warn!("Could not record finished session: {e}");
        }
    }
}

fn row_to_session(row: &Row<'_>) -> Result<LoggedSession, rusqlite::Error> {
    let mode_str: String = row.get(1)?;
    let completed_at_str: String = row.get(4)?;

    let completed_at = DateTime::parse_from_rfc3339(&completed_at_str)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(LoggedSession {
        id: row.get(0)?,
        mode: Mode::parse(&mode_str).unwrap_or_default(),
        minutes: row.get(2)?,
        rounds_completed: row.get(3)?,
        completed_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::timer::{SessionTimer, TaskQueue, TimerConfig};
    use crate::storage::MemoryStore;

    fn create_test_log() -> SessionLog {
        SessionLog::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_record_and_recent() {
        let log = create_test_log();
        let now = Utc::now();

        log.record(Mode::Work, 25, 1, now - Duration::minutes(30)).unwrap();
        log.record(Mode::ShortBreak, 5, 1, now - Duration::minutes(5)).unwrap();
        log.record(Mode::Work, 25, 2, now).unwrap();

        let recent = log.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].mode, Mode::Work);
        assert_eq!(recent[0].rounds_completed, 2);
        assert_eq!(recent[1].mode, Mode::ShortBreak);
    }

    #[test]
    fn test_work_totals_since() {
        let log = create_test_log();
        let now = Utc::now();

        log.record(Mode::Work, 25, 1, now - Duration::days(2)).unwrap();
        log.record(Mode::Work, 50, 2, now - Duration::hours(1)).unwrap();
        log.record(Mode::LongBreak, 15, 2, now).unwrap();

        let since = now - Duration::days(1);
        assert_eq!(log.work_count_since(since).unwrap(), 1);
        assert_eq!(log.work_minutes_since(since).unwrap(), 50);
    }

    #[test]
    fn test_clear() {
        let log = create_test_log();
        log.record(Mode::Work, 25, 1, Utc::now()).unwrap();
        log.record(Mode::Work, 25, 2, Utc::now()).unwrap();

        assert_eq!(log.clear().unwrap(), 2);
        assert!(log.recent(10).unwrap().is_empty());
    }

    #[test]
    fn test_listener_records_expiries_only() {
        let mut log = create_test_log();

        log.notify(&Notification::Expired {
            mode: Mode::Work,
            minutes: 25,
            rounds_completed: 3,
        });
        log.notify(&Notification::Update(
            SessionTimer::new(TaskQueue::new(), MemoryStore::new(), TimerConfig::default())
                .snapshot(),
        ));

        let recent = log.recent(10).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].mode, Mode::Work);
        assert_eq!(recent[0].minutes, 25);
        assert_eq!(recent[0].rounds_completed, 4);
    }

    #[test]
    fn test_timer_feeds_log() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let writer = SessionLog::with_database(Database::open_at(&db_path).unwrap());
        let mut timer = SessionTimer::new(
            TaskQueue::new(),
            MemoryStore::new(),
            TimerConfig::new(1, 1, 1, 4),
        )
        .with_listener(writer);

        timer.start();
        timer.advance_time(std::time::Duration::from_secs(60));
        timer.skip();

        let reader = SessionLog::with_database(Database::open_at(&db_path).unwrap());
        let recent = reader.recent(10).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].mode, Mode::Work);
        assert_eq!(recent[0].rounds_completed, 1);
    }
}
