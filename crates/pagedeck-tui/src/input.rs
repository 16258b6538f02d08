use crossterm::event::{KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Jump directly to a page (0-based)
    GoToPage(usize),
    ToggleIndicator,
    Help,
    PendingG, // First 'g' press, waiting for second 'g'
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Any key leaves the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // Digit keys jump straight to a page
    if let crossterm::event::KeyCode::Char(c) = key.code {
        if let Some(n) = c.to_digit(10) {
            if n >= 1 {
                return Action::GoToPage(n as usize - 1);
            }
        }
    }

    // "gg" double-press sequence
    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap
                .get_pending_g_action()
                .copied()
                .unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Some terminals report shifted punctuation ('?', '<') with the SHIFT
    // modifier set; retry the lookup without it.
    if let crossterm::event::KeyCode::Char(c) = key.code {
        if !c.is_ascii_alphabetic() && key.modifiers.contains(KeyModifiers::SHIFT) {
            if let Some(action) = keymap.get(&KeyBinding::simple(key.code)) {
                return *action;
            }
        }
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pagedeck_core::{deck, AppConfig};

    use crate::theme::Theme;

    fn demo_app() -> App {
        App::new(AppConfig::default(), Theme::default(), deck::builtin()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_navigation_keys() {
        let app = demo_app();
        let keymap = Keymap::default();

        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &app, &keymap), Action::NextPage);
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &app, &keymap), Action::PrevPage);
        assert_eq!(handle_key_event(key(KeyCode::Right), &app, &keymap), Action::NextPage);
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app, &keymap), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app, &keymap), Action::None);
    }

    #[test]
    fn test_digit_jumps_to_page() {
        let app = demo_app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app, &keymap),
            Action::GoToPage(2)
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = demo_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::FirstPage
        );
    }

    #[test]
    fn test_shifted_punctuation_matches() {
        let app = demo_app();
        let keymap = Keymap::default();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(shifted, &app, &keymap), Action::Help);
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let mut app = demo_app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('l')), &app, &keymap),
            Action::ExitMode
        );
    }
}
