//! Countdown and tick scheduling for focus cycles.
//!
//! [`Countdown`] holds the remaining seconds of a cycle. [`Ticker`] tells the
//! event loop when the next one-second tick is due so it can keep dispatching
//! input in between.

use std::time::{Duration, Instant};

use crate::error::ValidationError;

/// A countdown measured in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total_seconds: u64,
    remaining_seconds: u64,
}

impl Countdown {
    /// Create a countdown of `minutes * 60` seconds.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self::from_seconds(minutes as u64 * 60)
    }

    /// Create a countdown of `seconds`.
    #[must_use]
    pub const fn from_seconds(seconds: u64) -> Self {
        Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
        }
    }

    /// Remove exactly one second.
    ///
    /// Returns true if the countdown just reached zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        self.remaining_seconds == 0
    }

    /// Seconds left.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Get progress as a fraction (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_seconds as f64 / self.total_seconds as f64)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

/// Format seconds as MM:SS.
///
/// Minutes are not wrapped into hours, so 3661 seconds is `61:01`.
#[must_use]
pub fn format_mmss(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Parse the minutes field.
///
/// Accepts a positive integer with optional surrounding whitespace.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMinutes`] for anything else, zero included.
pub fn parse_minutes(input: &str) -> Result<u32, ValidationError> {
    match input.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(ValidationError::InvalidMinutes),
    }
}

/// Schedules one-second ticks without sleeping.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Schedule the first tick one period after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    /// Stop scheduling ticks.
    pub fn disarm(&mut self) {
        self.next = None;
    }

    /// Consume one due tick.
    ///
    /// Returns true and schedules the following tick if a tick was due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if next <= now => {
                self.next = Some(next + self.period);
                true
            }
            _ => false,
        }
    }

    /// How long the event loop may wait for input before the next tick.
    #[must_use]
    pub fn timeout(&self, now: Instant, max: Duration) -> Duration {
        self.next
            .map_or(max, |next| next.saturating_duration_since(now).min(max))
    }
}
