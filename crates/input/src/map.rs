//! Key mapping from terminal events to intents and driver commands.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Forward to the engine on the next tick
    Intent(Intent),
    /// Start a fresh game
    Restart,
    Quit,
}

/// Map a key event to a command. Release events are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(KeyCommand::Quit);
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Restart),
        code => map_intent(code).map(KeyCommand::Intent),
    }
}

/// Map a key code to an engine intent.
pub fn map_intent(code: KeyCode) -> Option<Intent> {
    match code {
        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(Intent::RotateCcw)
        }
        KeyCode::Up
        | KeyCode::Char('e')
        | KeyCode::Char('E')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Intent::RotateCw),

        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::SoftDrop),

        KeyCode::Char(' ') => Some(Intent::HardDrop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
