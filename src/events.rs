//! User actions
//!
//! Terminal input is translated into [`Action`]s before it reaches the store.

use crate::ui::store::Dashboard;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectDashboard(Dashboard),
    NextDashboard,
    PreviousDashboard,
    ToggleTheme,
    NextTimeframe,
    PreviousTimeframe,
    Quit,
}

/// Maps a key press to an action. Releases and unbound keys map to `None`.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('1') => Action::SelectDashboard(Dashboard::Trading),
        KeyCode::Char('2') => Action::SelectDashboard(Dashboard::Risk),
        KeyCode::Char('3') => Action::SelectDashboard(Dashboard::Executive),
        KeyCode::Char('4') => Action::SelectDashboard(Dashboard::Compliance),
        KeyCode::Tab => Action::NextDashboard,
        KeyCode::BackTab => Action::PreviousDashboard,
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTheme,
        KeyCode::Char('f') => Action::NextTimeframe,
        KeyCode::Char('F') => Action::PreviousTimeframe,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_select_dashboards() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('1'))),
            Some(Action::SelectDashboard(Dashboard::Trading))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('4'))),
            Some(Action::SelectDashboard(Dashboard::Compliance))
        );
    }

    #[test]
    fn test_navigation_and_toggles() {
        assert_eq!(action_for_key(press(KeyCode::Tab)), Some(Action::NextDashboard));
        assert_eq!(
            action_for_key(press(KeyCode::BackTab)),
            Some(Action::PreviousDashboard)
        );
        assert_eq!(action_for_key(press(KeyCode::Char('t'))), Some(Action::ToggleTheme));
        assert_eq!(action_for_key(press(KeyCode::Char('f'))), Some(Action::NextTimeframe));
        assert_eq!(
            action_for_key(press(KeyCode::Char('F'))),
            Some(Action::PreviousTimeframe)
        );
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    // Only presses and repeats count; releases are ignored.
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for_key(release), None);
    }
}
