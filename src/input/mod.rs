//! Key-to-action mapping for terminal input.
//!
//! Each keypress maps to at most one engine action; the engine itself
//! decides whether the action is legal. There is no repeat machinery here:
//! the game acts on discrete key events only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Action;

/// Map a key event to an engine action, if it has one.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::MoveDown),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Rotate),
        KeyCode::Char(' ') => Some(Action::HardDrop),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(Action::Reset),
        _ => None,
    }
}

/// True when the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
