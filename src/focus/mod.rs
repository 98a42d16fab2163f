//! Focus cycles and the weekly technology report.
//!
//! - Countdown timer and tick scheduling
//! - Append-only session storage
//! - Weekly per-tech aggregation
//! - Dashboard table and pie chart models
//! - The controller tying them to the UI

pub mod controller;
pub mod dashboard;
pub mod notify;
pub mod report;
pub mod session;
pub mod storage;
pub mod timer;

pub use controller::{ControllerState, Field, FocusController, TickOutcome};
pub use dashboard::{Dashboard, PieSlice, TableRow, PALETTE};
pub use notify::{DesktopNotifier, Notifier, SilentNotifier};
pub use report::{TechTotal, WeeklyReport};
pub use session::Session;
pub use storage::SessionStore;
pub use timer::{format_mmss, parse_minutes, Countdown, Ticker};
