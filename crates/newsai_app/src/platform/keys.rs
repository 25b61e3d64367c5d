//! Keyboard and paste translation.
//!
//! Editing works on the whole input value: every keystroke produces a
//! `SetInput` carrying the complete new string.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use newsai_core::{AppViewModel, Msg};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

pub fn translate_key(view: &AppViewModel, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('s') if ctrl => KeyAction::Dispatch(Msg::SubmitStart),
        KeyCode::Char('u') if ctrl => KeyAction::Dispatch(Msg::SetInput(String::new())),
        KeyCode::Tab | KeyCode::BackTab => {
            KeyAction::Dispatch(Msg::SetMode(view.active_mode.toggled()))
        }
        KeyCode::Enter if view.multiline && !alt => {
            KeyAction::Dispatch(Msg::SetInput(format!("{}\n", view.input_value)))
        }
        KeyCode::Enter => KeyAction::Dispatch(Msg::SubmitStart),
        KeyCode::Backspace => {
            let mut value = view.input_value.clone();
            if value.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Dispatch(Msg::SetInput(value))
        }
        KeyCode::Char(ch) if !ctrl => {
            KeyAction::Dispatch(Msg::SetInput(format!("{}{}", view.input_value, ch)))
        }
        _ => KeyAction::Ignore,
    }
}

/// Single-line inputs drop pasted line breaks.
pub fn paste(view: &AppViewModel, pasted: &str) -> Msg {
    let pasted = if view.multiline {
        pasted.replace("\r\n", "\n")
    } else {
        pasted.replace(['\r', '\n'], "")
    };
    Msg::SetInput(format!("{}{}", view.input_value, pasted))
}
