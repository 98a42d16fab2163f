//! Focus session storage.
//!
//! Append-only log of completed sessions plus the weekly per-tech report.

use std::path::Path;

use chrono::{Local, NaiveDate};
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::report::{report_window, TechTotal, WeeklyReport};
use super::session::{normalize_tech, Session};
use crate::error::FocusError;
use crate::storage::Database;

/// Storage for completed focus sessions.
pub struct SessionStore {
    db: Database,
}

impl SessionStore {
    /// Open the store backed by the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open_at(path: &Path) -> Result<Self, FocusError> {
        Ok(Self::with_database(Database::open_at(path)?))
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Ensure the sessions table exists. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub fn initialize(&self) -> Result<(), FocusError> {
        self.db.initialize()
    }

    /// The underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Record a completed session dated today.
    ///
    /// `tech` is uppercased before it is stored. The row is committed
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append(&self, task: &str, tech: &str, minutes: i64) -> Result<Session, FocusError> {
        self.insert(task, tech, minutes, Local::now().date_naive())
    }

    fn insert(
        &self,
        task: &str,
        tech: &str,
        minutes: i64,
        date: NaiveDate,
    ) -> Result<Session, FocusError> {
        let conn = self.db.connection();
        let tech = normalize_tech(tech);

        conn.execute(
            "INSERT INTO sessions (task, tech, minutes, date) VALUES (?1, ?2, ?3, ?4)",
            params![task, tech, minutes, date.to_string()],
        )
        .map_err(|e| FocusError::Database(format!("Failed to insert session: {e}")))?;

        let session = Session {
            id: conn.last_insert_rowid(),
            task: task.to_string(),
            tech,
            minutes,
            date,
        };
        info!(id = session.id, tech = %session.tech, minutes, "session recorded");
        Ok(session)
    }

    /// Get a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Session>, FocusError> {
        self.db
            .connection()
            .query_row(
                "SELECT id, task, tech, minutes, date FROM sessions WHERE id = ?1",
                [id],
                row_to_session,
            )
            .optional()
            .map_err(|e| FocusError::Database(format!("Failed to query session: {e}")))
    }

    /// Number of stored sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count(&self) -> Result<i64, FocusError> {
        self.db
            .connection()
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
            .map_err(|e| FocusError::Database(format!("Failed to count sessions: {e}")))
    }

    /// Minutes per tech over the last seven days, today included.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn weekly_report(&self) -> Result<WeeklyReport, FocusError> {
        self.weekly_report_as_of(Local::now().date_naive())
    }

    /// Minutes per tech for the seven days ending on `today`.
    ///
    /// Rows are ordered by total descending, ties by tech ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn weekly_report_as_of(&self, today: NaiveDate) -> Result<WeeklyReport, FocusError> {
        let (start, end) = report_window(today);
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT tech, SUM(minutes) AS total
                  FROM sessions
                  WHERE date >= ?1 AND date <= ?2
                  GROUP BY tech
                  ORDER BY total DESC, tech ASC",
            )
            .map_err(|e| FocusError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([start.to_string(), end.to_string()], |row| {
                Ok(TechTotal {
                    tech: row.get(0)?,
                    minutes: row.get(1)?,
                })
            })
            .map_err(|e| FocusError::Database(format!("Failed to query report: {e}")))?;

        let mut totals = Vec::new();
        for row in rows {
            totals.push(row.map_err(|e| FocusError::Database(e.to_string()))?);
        }

        debug!(rows = totals.len(), %start, %end, "weekly report read");
        Ok(WeeklyReport::new(start, end, totals))
    }

    /// Close the underlying connection.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` reports a failure while closing.
    pub fn close(self) -> Result<(), FocusError> {
        self.db.close()
    }
}

fn row_to_session(row: &Row<'_>) -> Result<Session, rusqlite::Error> {
    let date_str: String = row.get(4)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Session {
        id: row.get(0)?,
        task: row.get(1)?,
        tech: row.get(2)?,
        minutes: row.get(3)?,
        date,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn create_test_storage() -> SessionStore {
        SessionStore::with_database(Database::open_in_memory().unwrap())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_append_normalizes_and_stamps_today() {
        let storage = create_test_storage();

        let session = storage.append("Study", "python", 25).unwrap();
        let loaded = storage.get(session.id).unwrap().unwrap();

        assert_eq!(loaded.task, "Study");
        assert_eq!(loaded.tech, "PYTHON");
        assert_eq!(loaded.minutes, 25);
        assert_eq!(loaded.date, Local::now().date_naive());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let storage = create_test_storage();

        let a = storage.append("a", "go", 10).unwrap();
        let b = storage.append("b", "go", 10).unwrap();

        assert!(b.id > a.id);
        assert_eq!(storage.count().unwrap(), 2);
    }

    #[test]
    fn test_get_missing() {
        let storage = create_test_storage();
        assert!(storage.get(42).unwrap().is_none());
    }

    #[test]
    fn test_weekly_report_single_row() {
        let storage = create_test_storage();
        storage.append("Study", "python", 25).unwrap();

        let report = storage.weekly_report().unwrap();

        assert_eq!(report.totals(), &[TechTotal::new("PYTHON", 25)]);
    }

    #[test]
    fn test_weekly_report_merges_case() {
        let storage = create_test_storage();
        storage.append("A", "go", 10).unwrap();
        storage.append("B", "GO", 15).unwrap();

        let report = storage.weekly_report().unwrap();

        assert_eq!(report.totals(), &[TechTotal::new("GO", 25)]);
    }

    #[test]
    fn test_weekly_report_window_edges() {
        let storage = create_test_storage();
        let today = day(2024, 3, 15);

        storage.insert("edge", "rust", 30, today - Duration::days(6)).unwrap();
        storage.insert("old", "rust", 100, today - Duration::days(7)).unwrap();
        storage.insert("older", "java", 40, today - Duration::days(8)).unwrap();
        storage.insert("now", "rust", 5, today).unwrap();

        let report = storage.weekly_report_as_of(today).unwrap();

        assert_eq!(report.totals(), &[TechTotal::new("RUST", 35)]);
        assert_eq!(report.start(), day(2024, 3, 9));
        assert_eq!(report.end(), today);
    }

    #[test]
    fn test_weekly_report_ignores_future_dates() {
        let storage = create_test_storage();
        let today = day(2024, 3, 15);

        storage.insert("later", "go", 50, today + Duration::days(1)).unwrap();

        assert!(storage.weekly_report_as_of(today).unwrap().is_empty());
    }

    #[test]
    fn test_weekly_report_ordering() {
        let storage = create_test_storage();
        let today = day(2024, 3, 15);

        storage.insert("a", "sql", 10, today).unwrap();
        storage.insert("b", "rust", 50, today).unwrap();
        storage.insert("c", "go", 10, today).unwrap();
        storage.insert("d", "css", 30, today).unwrap();

        let report = storage.weekly_report_as_of(today).unwrap();
        let techs: Vec<_> = report.totals().iter().map(|t| t.tech.as_str()).collect();

        // Equal totals fall back to tech name.
        assert_eq!(techs, vec!["RUST", "CSS", "GO", "SQL"]);
    }

    #[test]
    fn test_weekly_report_empty() {
        let storage = create_test_storage();
        assert!(storage.weekly_report().unwrap().is_empty());
    }

    #[test]
    fn test_initialize_twice_keeps_rows() {
        let storage = create_test_storage();
        storage.append("Study", "python", 25).unwrap();

        storage.initialize().unwrap();
        storage.initialize().unwrap();

        assert_eq!(storage.count().unwrap(), 1);
        assert_eq!(
            storage.weekly_report().unwrap().totals(),
            &[TechTotal::new("PYTHON", 25)]
        );
    }

    #[test]
    fn test_missing_table_is_storage_error() {
        let storage = create_test_storage();
        storage
            .database()
            .connection()
            .execute_batch("DROP TABLE sessions;")
            .unwrap();

        assert!(storage.append("x", "go", 1).unwrap_err().is_storage());
        assert!(storage.weekly_report().unwrap_err().is_storage());
    }

    #[test]
    fn test_initialize_recreates_dropped_table() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("techfocus.db");

        let storage = SessionStore::open_at(&path).unwrap();
        storage
            .database()
            .connection()
            .execute_batch("DROP TABLE sessions;")
            .unwrap();
        storage.close().unwrap();

        let storage = SessionStore::open_at(&path).unwrap();
        storage.initialize().unwrap();
        storage.append("Study", "python", 25).unwrap();

        assert_eq!(
            storage.weekly_report().unwrap().totals(),
            &[TechTotal::new("PYTHON", 25)]
        );
    }

    #[test]
    fn test_initialize_repairs_in_place() {
        let storage = create_test_storage();
        storage
            .database()
            .connection()
            .execute_batch("DROP TABLE sessions;")
            .unwrap();
        assert!(storage.append("x", "go", 1).is_err());

        storage.initialize().unwrap();

        assert!(storage.append("x", "go", 1).is_ok());
        assert_eq!(storage.count().unwrap(), 1);
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("techfocus.db");

        let storage = SessionStore::open_at(&path).unwrap();
        storage.append("Study", "rust", 45).unwrap();
        storage.close().unwrap();

        let storage = SessionStore::open_at(&path).unwrap();
        assert_eq!(
            storage.weekly_report().unwrap().totals(),
            &[TechTotal::new("RUST", 45)]
        );
    }
}
