//! Key mapping from terminal events to player commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a player command.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::ReturnToMenu);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Down)
        }

        // Picks
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('/') => Some(Command::Select),
        KeyCode::Esc => Some(Command::Cancel),
        KeyCode::Char('?') => Some(Command::Hint),

        // Menu
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ReturnToMenu),

        _ => None,
    }
}

/// Check if key should leave the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
