//! Completed focus sessions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completed focus cycle, as stored.
///
/// Sessions are written once when a countdown reaches zero and never
/// updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Row id assigned by the database.
    pub id: i64,
    /// What was worked on.
    pub task: String,
    /// Technology tag, always uppercase.
    pub tech: String,
    /// Planned length of the cycle in minutes.
    pub minutes: i64,
    /// Local calendar date the session was recorded on.
    pub date: NaiveDate,
}

/// Normalize a technology tag for storage and grouping.
///
/// Tags are compared case-insensitively by uppercasing them.
#[must_use]
pub fn normalize_tech(tech: &str) -> String {
    tech.trim().to_uppercase()
}
