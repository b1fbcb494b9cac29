//! Win condition checking
//!
//! Five stones of one color in a row, column or diagonal win. When several
//! fives exist at once the first one in scan order is reported, so the
//! result is fully determined by the board contents.

use crate::board::{Board, Pos, Stone};

/// A completed five-in-a-row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Five {
    pub stone: Stone,
    pub positions: [Pos; 5],
}

/// Find the first five-in-a-row on the board.
///
/// Anchors are scanned row-major and, per anchor, the directions row,
/// column, down-right diagonal, up-right diagonal. Windows running off the
/// board are skipped.
pub fn find_winner(board: &Board) -> Option<Five> {
    board
        .lines::<5>()
        .find(|line| line.is_five_of_a_kind())
        .map(|line| Five {
            stone: line.cells[0],
            positions: line.positions,
        })
}
