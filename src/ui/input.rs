use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing beyond redrawing.
    None,
    /// A request was issued.
    Submitted,
    /// The app should exit.
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    // Raw mode swallows SIGINT, so Ctrl+C is handled here as well
    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::Quit;
    }

    if is_ctrl_char(key, 'u') {
        app.edit(FormIntent::ClearLink);
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => {
            if app.submit().is_some() {
                InputAction::Submitted
            } else {
                InputAction::None
            }
        }
        KeyCode::Backspace => {
            app.edit(FormIntent::Backspace);
            InputAction::None
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit(FormIntent::InsertChar(ch));
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
