//! Grid tests - bounds, placement, stamping and line clearing

use blockfall::core::{Bounds, Grid};
use blockfall::types::{TetrominoKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(grid: &mut Grid, row: i32, except: &[i32]) {
    let b = grid.bounds();
    for col in b.x_min..b.x_max {
        if !except.contains(&col) {
            assert!(grid.set(col, row, Some(TetrominoKind::I)));
        }
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert_eq!(
        grid.bounds(),
        Bounds {
            x_min: -5,
            y_min: -10,
            x_max: 5,
            y_max: 10
        }
    );

    for row in -10..10 {
        for col in -5..5 {
            assert_eq!(grid.get(col, row), Some(None), "({}, {})", col, row);
        }
    }
    assert!(grid.is_empty());
}

#[test]
fn test_odd_sizes_truncate_toward_zero() {
    let grid = Grid::new(7, 5);
    let b = grid.bounds();
    assert_eq!((b.x_min, b.x_max), (-3, 4));
    assert_eq!((b.y_min, b.y_max), (-2, 3));
}

#[test]
fn test_grid_get_out_of_bounds() {
    let mut grid = Grid::new(10, 20);

    assert_eq!(grid.get(-6, 0), None);
    assert_eq!(grid.get(5, 0), None);
    assert_eq!(grid.get(0, -11), None);
    assert_eq!(grid.get(0, 10), None);

    assert!(!grid.set(5, 0, Some(TetrominoKind::T)));
    assert!(!grid.is_occupied(5, 0));
    assert!(grid.is_empty());
}

#[test]
fn test_placement_checks_all_cells() {
    let mut grid = Grid::new(10, 20);
    let footprint = [(0, 0), (1, 0), (0, 1), (1, 1)];

    assert!(grid.is_valid_placement(&footprint, (3, -10)));
    // One cell past the right edge.
    assert!(!grid.is_valid_placement(&footprint, (4, -10)));
    // One cell below the floor.
    assert!(!grid.is_valid_placement(&footprint, (0, -11)));

    grid.set(4, -9, Some(TetrominoKind::Z));
    assert!(!grid.is_valid_placement(&footprint, (3, -10)));
}

#[test]
fn test_stamp_and_erase() {
    let mut grid = Grid::new(10, 20);
    let footprint = [(-1, 0), (0, 0), (1, 0), (0, 1)];

    grid.stamp(&footprint, (0, 0), TetrominoKind::T);
    assert_eq!(grid.occupied_count(), 4);
    assert_eq!(grid.get(0, 1), Some(Some(TetrominoKind::T)));

    grid.erase(&footprint, (0, 0));
    assert!(grid.is_empty());
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, -10, &[3]);
    fill_row(&mut grid, -9, &[-5]);
    let before = grid.clone();

    assert_eq!(grid.clear_completed_lines(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, -10, &[0]);
    fill_row(&mut grid, -9, &[]);
    grid.set(2, -8, Some(TetrominoKind::S));
    grid.set(-4, 9, Some(TetrominoKind::L));

    assert_eq!(grid.clear_completed_lines(), 1);

    // Row below the cleared one is untouched.
    assert!(!grid.is_occupied(0, -10));
    assert_eq!(grid.occupied_count(), 9 + 2);
    // Everything above moved down one row.
    assert_eq!(grid.get(2, -9), Some(Some(TetrominoKind::S)));
    assert_eq!(grid.get(-4, 8), Some(Some(TetrominoKind::L)));
    // The top row is empty.
    assert!(grid.row(9).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_adjacent_full_rows() {
    let mut grid = Grid::new(10, 20);
    for row in -10..-6 {
        fill_row(&mut grid, row, &[]);
    }
    grid.set(0, -6, Some(TetrominoKind::J));

    assert_eq!(grid.clear_completed_lines(), 4);
    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(grid.get(0, -10), Some(Some(TetrominoKind::J)));
}

#[test]
fn test_clear_separated_full_rows() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, -10, &[]);
    fill_row(&mut grid, -9, &[1]);
    fill_row(&mut grid, -8, &[]);

    assert_eq!(grid.clear_completed_lines(), 2);
    assert_eq!(grid.occupied_count(), 9);
    assert!(!grid.is_occupied(1, -10));
    assert!(grid.row(-9).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_full_top_row() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 9, &[]);

    assert_eq!(grid.clear_completed_lines(), 1);
    assert!(grid.is_empty());
}

#[test]
fn test_nine_columns_drop_into_cleared_row() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, -10, &[]);
    fill_row(&mut grid, -9, &[2]);
    grid.set(-5, -8, Some(TetrominoKind::T));

    assert_eq!(grid.clear_completed_lines(), 1);

    let bottom = grid.row(-10).unwrap();
    let occupied: Vec<i32> = (-5..5).filter(|&c| bottom[(c + 5) as usize].is_some()).collect();
    assert_eq!(occupied, vec![-5, -4, -3, -2, -1, 0, 1, 3, 4]);
    assert_eq!(grid.get(-5, -9), Some(Some(TetrominoKind::T)));
    assert!(grid.row(9).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_reset_to_empty() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 0, &[]);
    grid.reset_to_empty();
    assert!(grid.is_empty());
    assert_eq!(grid.width(), 10);
}
