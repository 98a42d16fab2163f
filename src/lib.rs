//! techfocus - a terminal focus timer with a weekly technology report
//!
//! Run a countdown for a task tagged with a technology; each completed cycle
//! is stored in a local `SQLite` database and summed per technology over the
//! last seven days.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod focus;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::{FocusError, ValidationError};
pub use focus::{FocusController, SessionStore, WeeklyReport};
