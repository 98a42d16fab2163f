//! Focus session controller.
//!
//! Owns the input form, the running countdown and the dashboard. The event
//! loop feeds it start/refresh actions and one-second ticks; storage and
//! notifications are injected so tests can run against isolated stores.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::dashboard::Dashboard;
use super::notify::Notifier;
use super::session::normalize_tech;
use super::storage::SessionStore;
use super::timer::{format_mmss, parse_minutes, Countdown};
use crate::error::ValidationError;

/// Title shown while no countdown is running.
pub const APP_TITLE: &str = "Tech Focus";

/// How long a transient notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Input fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Task,
    Tech,
    Minutes,
}

impl Field {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Task => Self::Tech,
            Self::Tech => Self::Minutes,
            Self::Minutes => Self::Task,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Task => Self::Minutes,
            Self::Tech => Self::Task,
            Self::Minutes => Self::Tech,
        }
    }

    /// Field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Tech => "Technology",
            Self::Minutes => "Minutes",
        }
    }
}

/// Raw text of the three input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub task: String,
    pub tech: String,
    pub minutes: String,
}

impl SessionForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Task => &self.task,
            Field::Tech => &self.tech,
            Field::Minutes => &self.minutes,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Task => &mut self.task,
            Field::Tech => &mut self.tech,
            Field::Minutes => &mut self.minutes,
        }
    }
}

/// A countdown in progress.
#[derive(Debug, Clone)]
pub struct RunningCycle {
    pub task: String,
    pub tech: String,
    pub minutes: u32,
    pub countdown: Countdown,
}

/// Controller state. `Idle -> Running -> Idle`.
#[derive(Debug, Clone, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Running(RunningCycle),
}

/// Result of feeding the controller one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was running.
    Idle,
    /// The countdown moved on by one second.
    Running,
    /// The countdown reached zero and the session was handled.
    Completed,
}

#[derive(Debug, Clone)]
struct Notice {
    message: String,
    shown_at: Instant,
}

/// Drives a focus cycle and keeps the dashboard in sync with the store.
pub struct FocusController<N: Notifier> {
    store: SessionStore,
    notifier: N,
    form: SessionForm,
    focus: Option<Field>,
    state: ControllerState,
    display: String,
    notice: Option<Notice>,
    minutes_error: Option<String>,
    dashboard: Dashboard,
}

impl<N: Notifier> FocusController<N> {
    /// Create an idle controller. The dashboard stays empty until [`Self::refresh`].
    pub fn new(store: SessionStore, notifier: N, default_minutes: u32) -> Self {
        Self {
            store,
            notifier,
            form: SessionForm {
                minutes: default_minutes.to_string(),
                ..SessionForm::default()
            },
            focus: Some(Field::Task),
            state: ControllerState::Idle,
            display: format_mmss(0),
            notice: None,
            minutes_error: None,
            dashboard: Dashboard::default(),
        }
    }

    /// Start a countdown from the current form contents.
    ///
    /// On a validation failure the matching notice or field error is shown
    /// and the controller stays idle.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] that kept the cycle from starting.
    pub fn start(&mut self) -> Result<(), ValidationError> {
        if self.is_running() {
            return Err(ValidationError::AlreadyRunning);
        }

        let task = self.form.task.trim().to_string();
        let tech = self.form.tech.trim().to_string();
        if task.is_empty() || tech.is_empty() {
            let err = ValidationError::MissingFields;
            self.show_notice(err.to_string());
            return Err(err);
        }

        let minutes = match parse_minutes(&self.form.minutes) {
            Ok(minutes) => minutes,
            Err(err) => {
                self.minutes_error = Some(err.to_string());
                return Err(err);
            }
        };

        let cycle = RunningCycle {
            task,
            tech,
            minutes,
            countdown: Countdown::from_minutes(minutes),
        };
        info!(task = %cycle.task, tech = %cycle.tech, minutes, "focus cycle started");

        self.minutes_error = None;
        self.focus = None;
        self.display = cycle.countdown.format_remaining();
        self.state = ControllerState::Running(cycle);
        Ok(())
    }

    /// Advance the running countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        let ControllerState::Running(cycle) = &mut self.state else {
            return TickOutcome::Idle;
        };

        if !cycle.countdown.tick() {
            self.display = cycle.countdown.format_remaining();
            debug!(remaining = %self.display, "tick");
            return TickOutcome::Running;
        }

        if let ControllerState::Running(cycle) = std::mem::take(&mut self.state) {
            self.complete(&cycle);
        }
        TickOutcome::Completed
    }

    fn complete(&mut self, cycle: &RunningCycle) {
        // A failed save still resets the UI; the failure is only logged.
        if let Err(e) = self
            .store
            .append(&cycle.task, &cycle.tech, i64::from(cycle.minutes))
        {
            warn!(error = %e, "failed to save focus session");
        }

        let message = format!("{} min of {} done.", cycle.minutes, normalize_tech(&cycle.tech));
        // Notification failures are ignored.
        if let Err(e) = self.notifier.notify("Focus cycle complete!", &message) {
            debug!(error = %e, "notification not delivered");
        }

        self.display = format_mmss(0);
        self.state = ControllerState::Idle;
        info!(tech = %cycle.tech, minutes = cycle.minutes, "focus cycle completed");

        self.refresh();
    }

    /// Rebuild the table and chart from the weekly report.
    ///
    /// If the report cannot be read the previous views are kept.
    pub fn refresh(&mut self) {
        match self.store.weekly_report() {
            Ok(report) => {
                self.dashboard = Dashboard::from_report(&report);
                debug!(rows = self.dashboard.rows().len(), "dashboard refreshed");
            }
            Err(e) => warn!(error = %e, "failed to refresh dashboard"),
        }
    }

    /// Whether a countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ControllerState::Running(_))
    }

    /// Inputs and the start button are only usable while idle.
    #[must_use]
    pub const fn inputs_enabled(&self) -> bool {
        !self.is_running()
    }

    #[must_use]
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Countdown text, `MM:SS`.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Window title reflecting the remaining time and tech.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.state {
            ControllerState::Idle => APP_TITLE.to_string(),
            ControllerState::Running(cycle) => {
                format!("({}) Focus: {}", self.display, cycle.tech)
            }
        }
    }

    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    #[must_use]
    pub const fn form(&self) -> &SessionForm {
        &self.form
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Inline error under the minutes field.
    #[must_use]
    pub fn minutes_error(&self) -> Option<&str> {
        self.minutes_error.as_deref()
    }

    /// Current transient notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.message.as_str())
    }

    /// Show a transient notice.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the notice once it has been visible for [`NOTICE_TTL`].
    pub fn expire_notice(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    /// Field that receives typed characters.
    #[must_use]
    pub const fn focused(&self) -> Option<Field> {
        self.focus
    }

    /// Set or clear input focus. Ignored while running.
    pub fn set_focus(&mut self, field: Option<Field>) {
        if self.inputs_enabled() {
            self.focus = field;
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(Some(self.focus.map_or(Field::Task, Field::next)));
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(Some(self.focus.map_or(Field::Minutes, Field::previous)));
    }

    /// Type a character into the focused field.
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.editable_field() {
            self.form.value_mut(field).push(c);
            self.field_edited(field);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.editable_field() {
            self.form.value_mut(field).pop();
            self.field_edited(field);
        }
    }

    /// Replace a field's contents. Ignored while running.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.inputs_enabled() {
            *self.form.value_mut(field) = value.into();
            self.field_edited(field);
        }
    }

    fn editable_field(&self) -> Option<Field> {
        self.focus.filter(|_| self.inputs_enabled())
    }

    fn field_edited(&mut self, field: Field) {
        if field == Field::Minutes {
            self.minutes_error = None;
        }
    }
}
