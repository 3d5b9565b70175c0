use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    NextSlide,
    PrevSlide,
    FirstPage,
    LastPage,
    /// Keep the focused carousel hovered, as if the pointer rested on it
    ToggleHold,
    /// Start editing the contact form
    Edit,
    Submit,
    Help,
    ExitMode,
    // Editing the contact form
    NextField,
    PrevField,
    /// Enter: newline in the message, next field elsewhere
    Confirm,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match &app.mode {
        Mode::Editing => return handle_editing_mode(key, keymap),
        // Any key closes overlays
        Mode::Help | Mode::Alert(_) => return Action::ExitMode,
        Mode::Normal => {}
    }

    let binding = KeyBinding::from_event(&key);
    if let Some(action) = keymap.get(&binding) {
        // Edit and submit only make sense on the form
        return match action {
            Action::Edit | Action::Submit if app.focus != Focus::Contact => Action::None,
            _ => action.clone(),
        };
    }

    match key.code {
        KeyCode::Esc => Action::ExitMode,
        _ => Action::None,
    }
}

/// Handle key events while typing into the contact form
fn handle_editing_mode(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::from_event(&key);
    if keymap.get(&binding) == Some(&Action::Submit) {
        return Action::Submit;
    }

    match key.code {
        KeyCode::Esc => Action::ExitMode,
        KeyCode::Tab => Action::NextField,
        KeyCode::BackTab => Action::PrevField,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputChar(c),
        _ => Action::None,
    }
}
