//! Terminal User Interface (TUI) for techfocus.
//!
//! Renders the focus form, countdown and weekly dashboard, and drives the
//! controller from key events and one-second ticks. Built with ratatui and
//! crossterm.

mod event;
mod ui;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;
use tracing::info;

use crate::error::FocusError;
use crate::focus::{FocusController, Notifier, TickOutcome, Ticker};

/// Longest wait for input between redraws.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or draw.
pub fn run<N: Notifier>(controller: &mut FocusController<N>) -> Result<(), FocusError> {
    enable_raw_mode()
        .map_err(|e| FocusError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| FocusError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, controller);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if controller.is_running() {
        info!("exited with a focus cycle in progress; it was not saved");
    }
    result
}

/// Load the weekly dashboard and draw the first frame.
fn init<B: Backend, N: Notifier>(
    terminal: &mut Terminal<B>,
    controller: &mut FocusController<N>,
) -> Result<(), FocusError> {
    controller.refresh();
    terminal
        .draw(|frame| ui::render(frame, controller))
        .map_err(|e| FocusError::Terminal(format!("Failed to draw: {e}")))?;
    Ok(())
}

/// Run the main application loop.
fn run_app<B, N>(
    terminal: &mut Terminal<B>,
    controller: &mut FocusController<N>,
) -> Result<(), FocusError>
where
    B: Backend + Write,
    N: Notifier,
{
    init(terminal, controller)?;

    let mut ticker = Ticker::new(Duration::from_secs(1));
    let mut shown_title = String::new();

    loop {
        let now = Instant::now();
        controller.expire_notice(now);

        let title = controller.title();
        if title != shown_title {
            execute!(terminal.backend_mut(), SetTitle(&title))
                .map_err(|e| FocusError::Terminal(format!("Failed to set title: {e}")))?;
            shown_title = title;
        }

        terminal
            .draw(|frame| ui::render(frame, controller))
            .map_err(|e| FocusError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(controller, ticker.timeout(now, POLL_INTERVAL))? {
            match action {
                event::Action::Quit => break,
                event::Action::Refresh => controller.refresh(),
                event::Action::Start => {
                    if controller.start().is_ok() {
                        ticker.arm(Instant::now());
                    }
                }
            }
        }

        while ticker.take_due(Instant::now()) {
            if controller.tick() != TickOutcome::Running {
                ticker.disarm();
            }
        }
    }

    Ok(())
}
