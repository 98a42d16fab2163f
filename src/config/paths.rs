//! Path resolution for techfocus data files.
//!
//! All data is kept relative to the application's working directory:
//! - `techfocus.yaml` - Optional configuration file
//! - `techfocus.db` - SQLite database of completed focus sessions
//! - `logs/` - Daily rolling log files

use std::path::PathBuf;

use crate::error::FocusError;

/// Fixed database file name.
pub const DATABASE_FILE: &str = "techfocus.db";

/// Fixed configuration file name.
pub const CONFIG_FILE: &str = "techfocus.yaml";

/// Paths to techfocus data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory (the working directory).
    pub root: PathBuf,
    /// Config file: `./techfocus.yaml`
    pub config_file: PathBuf,
    /// Database file: `./techfocus.db`
    pub database: PathBuf,
    /// Log directory: `./logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Create paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, FocusError> {
        let cwd = std::env::current_dir().map_err(|e| {
            FocusError::Config(format!("Could not determine working directory: {e}"))
        })?;
        Ok(Self::with_root(cwd))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join(CONFIG_FILE),
            database: root.join(DATABASE_FILE),
            logs: root.join("logs"),
            root,
        }
    }

    /// Ensure the log directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocusError> {
        if !self.logs.exists() {
            std::fs::create_dir_all(&self.logs).map_err(|e| {
                FocusError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.logs.display()
                ))
            })?;
        }
        Ok(())
    }
}
