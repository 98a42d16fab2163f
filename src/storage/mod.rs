//! Storage layer for techfocus.
//!
//! `SQLite` persistence for the append-only log of completed focus sessions.

mod database;
mod migrations;

pub use database::Database;
