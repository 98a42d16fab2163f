//! Configuration management for techfocus.
//!
//! Everything lives next to the working directory: the session database,
//! an optional `techfocus.yaml` and the `logs/` directory.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, FocusConfig, LoggingConfig};
