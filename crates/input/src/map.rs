//! Key mapping from terminal events to game actions.
//!
//! Arrows, WASD and vi keys all steer the piece. Letters match in either case.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Letter bindings, lowercase.
const LETTER_KEYS: [(char, GameAction); 10] = [
    ('a', GameAction::MoveLeft),
    ('h', GameAction::MoveLeft),
    ('d', GameAction::MoveRight),
    ('l', GameAction::MoveRight),
    ('w', GameAction::Rotate),
    ('k', GameAction::Rotate),
    ('s', GameAction::SoftDrop),
    ('j', GameAction::SoftDrop),
    ('p', GameAction::Pause),
    ('r', GameAction::Restart),
];

/// Map a key press to a game action, if it is bound.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            LETTER_KEYS
                .iter()
                .find(|(key, _)| *key == c)
                .map(|&(_, action)| action)
        }
        _ => None,
    }
}

/// `q` in either case, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
