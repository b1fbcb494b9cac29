//! Shared test fixtures

use std::fs;
use std::path::PathBuf;

use crate::board::{Board, Pos, Stone};

/// Build a legal board from text rows (`W`, `B`, `.`).
///
/// Stones are placed alternately, white first, so the fixture must hold as
/// many white stones as black ones, or exactly one more.
pub(crate) fn board_from_rows(rows: &[&str]) -> Board {
    let height = rows.len();
    let width = rows[0].len();
    let mut board = Board::new(width, height);

    let mut whites = Vec::new();
    let mut blacks = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), width, "ragged fixture row {row}");
        for (col, ch) in line.chars().enumerate() {
            match ch {
                'W' => whites.push(Pos::new(row, col)),
                'B' => blacks.push(Pos::new(row, col)),
                '.' => {}
                other => panic!("invalid fixture cell {other:?}"),
            }
        }
    }
    assert!(
        whites.len() == blacks.len() || whites.len() == blacks.len() + 1,
        "fixture needs equal stones or one extra white ({} white, {} black)",
        whites.len(),
        blacks.len()
    );

    for (i, &white) in whites.iter().enumerate() {
        board.set(white, Stone::White).unwrap();
        if let Some(&black) = blacks.get(i) {
            board.set(black, Stone::Black).unwrap();
        }
    }
    board
}

/// Typed coordinate array for assertions
pub(crate) fn positions<const N: usize>(pairs: [(usize, usize); N]) -> [Pos; N] {
    pairs.map(|(row, col)| Pos::new(row, col))
}

/// Every cell that differs between two boards of equal size
pub(crate) fn changed_cells(before: &Board, after: &Board) -> Vec<Pos> {
    before
        .positions()
        .filter(|&p| before[p] != after[p])
        .collect()
}

/// Fresh per-test scratch directory under the system temp dir
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gomoku-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}
