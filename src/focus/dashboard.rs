//! Dashboard view models: the report table and the pie chart.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::style::Color;

use super::report::WeeklyReport;

/// Slice colors, cycled by row position.
pub const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::Red,
    Color::Cyan,
];

/// One row of the report table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub tech: String,
    pub total_minutes: i64,
}

/// One pie chart slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Summed minutes, used as the slice weight.
    pub value: f64,
    /// `"{tech}\n{total}m"`
    pub label: String,
    pub color: Color,
}

/// Table and chart contents for the weekly report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    rows: Vec<TableRow>,
    slices: Vec<PieSlice>,
}

impl Dashboard {
    /// Build both views from a report, preserving report order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_report(report: &WeeklyReport) -> Self {
        let mut dashboard = Self::default();

        for (i, total) in report.totals().iter().enumerate() {
            dashboard.rows.push(TableRow {
                tech: total.tech.clone(),
                total_minutes: total.minutes,
            });
            dashboard.slices.push(PieSlice {
                value: total.minutes as f64,
                label: format!("{}\n{}m", total.tech, total.minutes),
                color: PALETTE[i % PALETTE.len()],
            });
        }

        dashboard
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.slices.is_empty()
    }
}

/// Points to plot for each slice of a donut chart in unit coordinates.
///
/// Slices start at twelve o'clock and run clockwise. `inner` is the radius of
/// the hole (0.0 for a full pie), `rings` and `steps_per_turn` set the sampling
/// density.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn donut_points(
    slices: &[PieSlice],
    inner: f64,
    rings: usize,
    steps_per_turn: usize,
) -> Vec<(Color, Vec<(f64, f64)>)> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 || rings == 0 || steps_per_turn == 0 {
        return Vec::new();
    }

    let step = TAU / steps_per_turn as f64;
    let mut start = 0.0;
    let mut out = Vec::with_capacity(slices.len());

    for slice in slices {
        let sweep = slice.value.max(0.0) / total * TAU;
        let end = start + sweep;
        let mut coords = Vec::new();

        let mut angle = start;
        while angle < end {
            let theta = FRAC_PI_2 - angle;
            for ring in 0..=rings {
                let r = inner + (1.0 - inner) * ring as f64 / rings as f64;
                coords.push((r * theta.cos(), r * theta.sin()));
            }
            angle += step;
        }

        out.push((slice.color, coords));
        start = end;
    }

    out
}
