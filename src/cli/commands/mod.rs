//! Command implementations for techfocus.

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::FocusError;
use crate::focus::{DesktopNotifier, FocusController, Notifier, SessionStore, SilentNotifier};
use crate::output::format_report;

/// Execute the report command.
///
/// # Errors
///
/// Returns an error if the report cannot be read or formatted.
pub fn report(store: &SessionStore, format: OutputFormat) -> Result<String, FocusError> {
    let report = store.weekly_report()?;
    format_report(&report, format)
}

/// Build the notifier selected by the configuration.
#[must_use]
pub fn notifier(config: &Config) -> Box<dyn Notifier> {
    if config.focus.notifications {
        Box::new(DesktopNotifier)
    } else {
        Box::new(SilentNotifier)
    }
}

/// Run the interactive timer.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub fn tui(store: SessionStore, config: &Config) -> Result<(), FocusError> {
    let mut controller = FocusController::new(store, notifier(config), config.focus.default_minutes);
    crate::tui::run(&mut controller)
}
