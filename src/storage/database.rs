//! `SQLite` database connection.
//!
//! The database lives at `./techfocus.db` and holds the `sessions` table.

use std::path::Path;

use rusqlite::Connection;

use crate::error::FocusError;

use super::migrations;

/// Database connection wrapper.
///
/// Owns its connection exclusively; it is never shared between threads.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, FocusError> {
        let conn = Connection::open(path).map_err(|e| {
            FocusError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, FocusError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            FocusError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Ensure the schema exists.
    ///
    /// Safe to call on every startup; existing rows are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails.
    pub fn initialize(&self) -> Result<(), FocusError> {
        migrations::run(&self.conn)
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error `SQLite` reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection could not be closed cleanly.
    pub fn close(self) -> Result<(), FocusError> {
        self.conn
            .close()
            .map_err(|(_, e)| FocusError::Database(format!("Failed to close database: {e}")))
    }
}
