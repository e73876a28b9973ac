//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a game action.
///
/// Press and auto-repeat both count; release events (only reported by
/// terminals with the kitty keyboard protocol) are ignored.
pub fn action_for(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode swallows SIGINT, so Ctrl-C is handled here as well.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
