//! Weekly focus report.
//!
//! Total minutes per technology tag over the trailing seven days.

use chrono::{Duration, NaiveDate};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Number of days covered by the weekly report, today included.
pub const REPORT_DAYS: i64 = 7;

/// First and last day of the report window ending on `today`.
#[must_use]
pub fn report_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(REPORT_DAYS - 1), today)
}

/// Focus minutes for a single tech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechTotal {
    /// Uppercased tech tag.
    pub tech: String,
    /// Summed minutes.
    pub minutes: i64,
}

impl TechTotal {
    /// Create a total.
    #[must_use]
    pub fn new(tech: impl Into<String>, minutes: i64) -> Self {
        Self {
            tech: tech.into(),
            minutes,
        }
    }
}

/// Per-tech totals for the last seven days, largest first.
///
/// Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    start: NaiveDate,
    end: NaiveDate,
    totals: Vec<TechTotal>,
}

impl WeeklyReport {
    /// Build a report from already ordered totals.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate, totals: Vec<TechTotal>) -> Self {
        Self { start, end, totals }
    }

    /// First day in the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day in the window (today).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Rows in report order.
    #[must_use]
    pub fn totals(&self) -> &[TechTotal] {
        &self.totals
    }

    /// Whether no sessions fell in the window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of minutes over all techs.
    #[must_use]
    pub fn total_minutes(&self) -> i64 {
        self.totals.iter().map(|t| t.minutes).sum()
    }

    /// Format the report for terminal display.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn format(&self) -> String {
        let mut lines = Vec::new();

        lines.push(
            format!("Weekly Focus Report: {} to {}", self.start, self.end)
                .bold()
                .to_string(),
        );
        lines.push("═".repeat(50));

        if self.totals.is_empty() {
            lines.push("  No focus sessions in the last 7 days".dimmed().to_string());
            return lines.join("\n");
        }

        let max = self.totals.iter().map(|t| t.minutes).max().unwrap_or(1).max(1);
        let width = self
            .totals
            .iter()
            .map(|t| t.tech.chars().count())
            .max()
            .unwrap_or(4)
            .max(4);

        lines.push(format!("  {:<width$} {:>11}", "Tech", "Total (min)"));
        lines.push("─".repeat(50));

        for total in &self.totals {
            let bar_len = (total.minutes.max(0) as f64 / max as f64 * 20.0) as usize;
            lines.push(format!(
                "  {:<width$} {:>11} {}",
                total.tech,
                total.minutes,
                "█".repeat(bar_len).cyan()
            ));
        }

        lines.push("─".repeat(50));
        lines.push(format!(
            "  {} {:>11}",
            format!("{:<width$}", "Total").bold(),
            self.total_minutes()
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> WeeklyReport {
        WeeklyReport::new(
            day(2024, 3, 9),
            day(2024, 3, 15),
            vec![TechTotal::new("RUST", 90), TechTotal::new("GO", 25)],
        )
    }

    #[test]
    fn test_report_window() {
        let (start, end) = report_window(day(2024, 3, 1));
        assert_eq!(start, day(2024, 2, 24));
        assert_eq!(end, day(2024, 3, 1));
    }

    #[test]
    fn test_totals() {
        let report = sample();
        assert_eq!(report.total_minutes(), 115);
        assert_eq!(report.totals()[1], TechTotal::new("GO", 25));
    }

    #[test]
    fn test_format_lists_every_tech() {
        colored::control::set_override(false);
        let text = sample().format();

        assert!(text.contains("2024-03-09 to 2024-03-15"));
        assert!(text.contains("RUST"));
        assert!(text.contains("90"));
        assert!(text.contains("GO"));
        assert!(text.contains("115"));
    }

    #[test]
    fn test_format_empty() {
        colored::control::set_override(false);
        let report = WeeklyReport::new(day(2024, 3, 9), day(2024, 3, 15), Vec::new());

        assert!(report.format().contains("No focus sessions"));
    }

    #[test]
    fn test_serializes_rows() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["totals"][0]["tech"], "RUST");
        assert_eq!(json["totals"][1]["minutes"], 25);
        assert_eq!(json["start"], "2024-03-09");
    }
}
