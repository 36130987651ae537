//! Rotation tests - SRS transforms and wall kicks on the active piece

use blockfall::core::{shape, ActivePiece, Grid, PieceTiming};
use blockfall::types::{RotationDirection, TetrominoKind, LOCK_DELAY_MS, STEP_DELAY_MS};

const TIMING: PieceTiming = PieceTiming {
    step_delay_ms: STEP_DELAY_MS,
    lock_delay_ms: LOCK_DELAY_MS,
};

fn sorted(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let mut v = cells.to_vec();
    v.sort();
    v
}

#[test]
fn test_all_kinds_rotate_in_open_space() {
    let grid = Grid::new(10, 20);
    for kind in TetrominoKind::ALL {
        for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
            let mut piece = ActivePiece::new(kind, (0, 0), TIMING);
            assert!(piece.rotate(&grid, direction), "{:?} {:?}", kind, direction);
            // No kick needed in the middle of an empty board.
            assert_eq!(piece.position(), (0, 0));
        }
    }
}

#[test]
fn test_rotation_state_wraps() {
    let grid = Grid::new(10, 20);
    let mut piece = ActivePiece::new(TetrominoKind::L, (0, 0), TIMING);

    piece.rotate(&grid, RotationDirection::CounterClockwise);
    assert_eq!(piece.rotation(), 3);
    piece.rotate(&grid, RotationDirection::Clockwise);
    assert_eq!(piece.rotation(), 0);
}

#[test]
fn test_t_counter_clockwise_points_left() {
    let grid = Grid::new(10, 20);
    let mut piece = ActivePiece::new(TetrominoKind::T, (0, 0), TIMING);

    piece.rotate(&grid, RotationDirection::CounterClockwise);
    assert_eq!(
        sorted(piece.cells()),
        sorted(&[(-1, 0), (0, 1), (0, 0), (0, -1)])
    );
}

#[test]
fn test_o_rotation_does_not_drift() {
    let grid = Grid::new(10, 20);
    let mut piece = ActivePiece::new(TetrominoKind::O, (0, 0), TIMING);
    let before = piece.footprint();

    for _ in 0..3 {
        assert!(piece.rotate(&grid, RotationDirection::Clockwise));
        assert_eq!(sorted(&piece.footprint()), sorted(&before));
    }
}

#[test]
fn test_i_states_match_srs() {
    let grid = Grid::new(10, 20);
    let mut piece = ActivePiece::new(TetrominoKind::I, (0, 0), TIMING);

    piece.rotate(&grid, RotationDirection::Clockwise);
    assert_eq!(sorted(piece.cells()), vec![(1, -1), (1, 0), (1, 1), (1, 2)]);

    piece.rotate(&grid, RotationDirection::Clockwise);
    assert_eq!(sorted(piece.cells()), vec![(-1, 0), (0, 0), (1, 0), (2, 0)]);

    piece.rotate(&grid, RotationDirection::Clockwise);
    assert_eq!(sorted(piece.cells()), vec![(0, -1), (0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_wall_kick_off_left_wall() {
    let grid = Grid::new(10, 20);
    // T pointing right, pushed flush against the left wall.
    let mut piece = ActivePiece::new(TetrominoKind::T, (0, 0), TIMING);
    assert!(piece.rotate(&grid, RotationDirection::Clockwise));
    while piece.try_move(&grid, -1, 0) {}
    assert_eq!(piece.position(), (-5, 0));

    // Pointing down needs a column at x = -6, so the first kick moves it right.
    assert!(piece.rotate(&grid, RotationDirection::Clockwise));
    assert_eq!(piece.rotation(), 2);
    assert_eq!(piece.position(), (-4, 0));
    assert!(piece.is_valid(&grid));
}

#[test]
fn test_i_kick_near_right_wall() {
    let grid = Grid::new(10, 20);
    // Upright I (state 1) in the rightmost column.
    let mut piece = ActivePiece::new(TetrominoKind::I, (0, 0), TIMING);
    piece.rotate(&grid, RotationDirection::Clockwise);
    while piece.try_move(&grid, 1, 0) {}
    assert_eq!(piece.footprint()[0].0, 4);

    // Lying flat again must move the bar left to fit.
    assert!(piece.rotate(&grid, RotationDirection::CounterClockwise));
    assert_eq!(piece.rotation(), 0);
    assert!(piece.footprint().iter().all(|&(c, _)| c < 5));
    assert!(piece.is_valid(&grid));
}

#[test]
fn test_blocked_rotation_restores_piece() {
    let mut grid = Grid::new(10, 20);
    // Fill everything except a flat slot for an I piece at row 0.
    for row in -10..10 {
        for col in -5..5 {
            if !(row == 1 && (-1..3).contains(&col)) {
                grid.set(col, row, Some(TetrominoKind::Z));
            }
        }
    }

    let mut piece = ActivePiece::new(TetrominoKind::I, (0, 0), TIMING);
    assert!(piece.is_valid(&grid));
    let before = piece.clone();

    assert!(!piece.rotate(&grid, RotationDirection::Clockwise));
    assert_eq!(piece, before);
    assert!(!piece.rotate(&grid, RotationDirection::CounterClockwise));
    assert_eq!(piece, before);
}

#[test]
fn test_spawn_cells_come_from_shape_table() {
    for kind in TetrominoKind::ALL {
        let piece = ActivePiece::new(kind, (0, 0), TIMING);
        assert_eq!(piece.cells(), &shape(kind).cells);
    }
}
