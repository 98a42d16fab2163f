//! Output formatting for the `report` command.

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::FocusError;
use crate::focus::WeeklyReport;

/// Format the weekly report based on output format.
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_report(report: &WeeklyReport, format: OutputFormat) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(report.format()),
        OutputFormat::Json => to_json(report),
    }
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusError> {
    Ok(serde_json::to_string_pretty(value)?)
}
