//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FocusError;
use crate::focus::{FocusController, Notifier};

/// Help text shown in the status bar.
pub const HELP: &str =
    "Tab:next field | Enter:start | Esc:leave field | r/F5:refresh | q:quit";

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start a focus cycle from the form.
    Start,
    /// Reload the weekly dashboard.
    Refresh,
}

/// Handle terminal events, waiting at most `timeout` for one.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<N: Notifier>(
    controller: &mut FocusController<N>,
    timeout: Duration,
) -> Result<Option<Action>, FocusError> {
    if !event::poll(timeout)
        .map_err(|e| FocusError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| FocusError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) => Ok(handle_key(controller, key)),
        _ => Ok(None),
    }
}

/// Apply a key press to the controller.
///
/// Field edits are applied to the controller directly; anything the event
/// loop must act on is returned as an [`Action`].
pub fn handle_key<N: Notifier>(
    controller: &mut FocusController<N>,
    key: KeyEvent,
) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    let editing = controller.inputs_enabled() && controller.focused().is_some();

    match key.code {
        KeyCode::F(5) => Some(Action::Refresh),
        KeyCode::Tab | KeyCode::Down => {
            controller.focus_next();
            None
        }
        KeyCode::BackTab | KeyCode::Up => {
            controller.focus_previous();
            None
        }
        KeyCode::Enter if controller.inputs_enabled() => Some(Action::Start),
        KeyCode::Esc if editing => {
            controller.set_focus(None);
            None
        }
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Backspace => {
            controller.backspace();
            None
        }
        KeyCode::Char(c) if editing => {
            controller.input_char(c);
            None
        }
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('?') => {
            controller.show_notice(HELP);
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{Field, SessionStore, SilentNotifier};
    use crate::storage::Database;

    fn controller() -> FocusController<SilentNotifier> {
        let store = SessionStore::with_database(Database::open_in_memory().unwrap());
        FocusController::new(store, SilentNotifier, 25)
    }

    fn running() -> FocusController<SilentNotifier> {
        let mut c = controller();
        c.set_field(Field::Task, "Read docs");
        c.set_field(Field::Tech, "rust");
        c.set_field(Field::Minutes, "1");
        c.start().unwrap();
        c
    }

    fn press(c: &mut FocusController<SilentNotifier>, code: KeyCode) -> Option<Action> {
        handle_key(c, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: &mut FocusController<SilentNotifier>, ch: char) -> Option<Action> {
        handle_key(c, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_enter_starts_only_while_idle() {
        let mut c = controller();
        assert_eq!(press(&mut c, KeyCode::Enter), Some(Action::Start));

        let mut c = running();
        assert_eq!(press(&mut c, KeyCode::Enter), None);
    }

    #[test]
    fn test_r_types_into_focused_field() {
        let mut c = controller();
        assert_eq!(c.focused(), Some(Field::Task));

        assert_eq!(press(&mut c, KeyCode::Char('r')), None);
        assert_eq!(c.form().task, "r");
    }

    #[test]
    fn test_r_refreshes_without_focus() {
        let mut c = controller();
        c.set_focus(None);

        assert_eq!(press(&mut c, KeyCode::Char('r')), Some(Action::Refresh));
        assert_eq!(c.form().task, "");
    }

    #[test]
    fn test_f5_and_ctrl_r_always_refresh() {
        let mut c = controller();
        assert_eq!(press(&mut c, KeyCode::F(5)), Some(Action::Refresh));
        assert_eq!(ctrl(&mut c, 'r'), Some(Action::Refresh));
        assert_eq!(c.form().task, "");

        let mut c = running();
        assert_eq!(press(&mut c, KeyCode::F(5)), Some(Action::Refresh));
        assert_eq!(ctrl(&mut c, 'r'), Some(Action::Refresh));
        assert_eq!(press(&mut c, KeyCode::Char('r')), Some(Action::Refresh));
    }

    #[test]
    fn test_quit_keys() {
        let mut c = controller();
        assert_eq!(ctrl(&mut c, 'c'), Some(Action::Quit));

        c.set_focus(None);
        assert_eq!(press(&mut c, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(press(&mut c, KeyCode::Esc), Some(Action::Quit));

        let mut c = running();
        assert_eq!(press(&mut c, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(press(&mut c, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(ctrl(&mut c, 'c'), Some(Action::Quit));
    }

    #[test]
    fn test_esc_leaves_field_first() {
        let mut c = controller();

        assert_eq!(press(&mut c, KeyCode::Esc), None);
        assert_eq!(c.focused(), None);
        assert_eq!(press(&mut c, KeyCode::Esc), Some(Action::Quit));
    }

    #[test]
    fn test_q_types_into_focused_field() {
        let mut c = controller();
        c.set_focus(Some(Field::Tech));

        assert_eq!(press(&mut c, KeyCode::Char('q')), None);
        assert_eq!(c.form().tech, "q");
    }

    #[test]
    fn test_tab_and_arrows_move_focus() {
        let mut c = controller();

        press(&mut c, KeyCode::Tab);
        assert_eq!(c.focused(), Some(Field::Tech));
        press(&mut c, KeyCode::Down);
        assert_eq!(c.focused(), Some(Field::Minutes));
        press(&mut c, KeyCode::BackTab);
        assert_eq!(c.focused(), Some(Field::Tech));
        press(&mut c, KeyCode::Up);
        assert_eq!(c.focused(), Some(Field::Task));
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut c = controller();
        c.set_focus(Some(Field::Minutes));

        assert_eq!(press(&mut c, KeyCode::Backspace), None);
        assert_eq!(c.form().minutes, "2");
    }

    #[test]
    fn test_edits_ignored_while_running() {
        let mut c = running();

        assert_eq!(press(&mut c, KeyCode::Char('x')), None);
        press(&mut c, KeyCode::Tab);
        press(&mut c, KeyCode::Backspace);

        assert_eq!(c.focused(), None);
        assert_eq!(c.form().task, "Read docs");
        assert_eq!(c.form().tech, "rust");
        assert_eq!(c.form().minutes, "1");
    }

    #[test]
    fn test_question_mark_shows_help() {
        let mut c = controller();
        c.set_focus(None);

        assert_eq!(press(&mut c, KeyCode::Char('?')), None);
        assert_eq!(c.notice(), Some(HELP));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut c = controller();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        assert_eq!(handle_key(&mut c, release), None);
        assert_eq!(c.form().task, "");

        let release = KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Release,
        );
        assert_eq!(handle_key(&mut c, release), None);
    }
}
