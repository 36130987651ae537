//! Key events through the intent queue into the engine

use crossterm::event::{KeyCode, KeyEvent};

use blockfall::core::{Game, TickOutcome};
use blockfall::input::{handle_key_event, IntentQueue, KeyCommand};
use blockfall::types::{Intent, TetrominoKind};

fn queue_keys(queue: &mut IntentQueue, codes: &[KeyCode]) {
    for &code in codes {
        if let Some(KeyCommand::Intent(intent)) = handle_key_event(KeyEvent::from(code)) {
            queue.push(intent);
        }
    }
}

#[test]
fn test_keys_drive_the_active_piece() {
    let mut game = Game::default();
    game.spawn_kind(TetrominoKind::T);

    let mut queue = IntentQueue::new();
    queue_keys(
        &mut queue,
        &[KeyCode::Char('d'), KeyCode::Right, KeyCode::Char('e'), KeyCode::Char('x')],
    );
    assert_eq!(
        queue.as_slice(),
        &[Intent::MoveRight, Intent::MoveRight, Intent::RotateCw]
    );

    assert_eq!(game.tick(16, queue.as_slice()), TickOutcome::Continued);
    queue.clear();

    let piece = game.active().unwrap();
    assert_eq!(piece.position(), (1, 8));
    assert_eq!(piece.rotation(), 1);
}

#[test]
fn test_space_hard_drops() {
    let mut game = Game::default();
    game.spawn_kind(TetrominoKind::O);

    let mut queue = IntentQueue::new();
    queue_keys(&mut queue, &[KeyCode::Char(' '), KeyCode::Left]);

    assert_eq!(
        game.tick(16, queue.as_slice()),
        TickOutcome::Locked { lines_cleared: 0 }
    );
    assert!(game.grid().is_occupied(-1, -10));
}

#[test]
fn test_driver_commands_are_not_intents() {
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
        Some(KeyCommand::Restart)
    );
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Esc)),
        Some(KeyCommand::Quit)
    );
}
