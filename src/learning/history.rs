//! Move-log algebra for matching past games against the live one
//!
//! Logs are compared by the colored boards they reproduce, so two games
//! that differ only by a translation match each other.

use std::collections::BTreeMap;

use crate::board::{Pos, Stone};
use crate::error::HistoryError;

/// Smallest grid holding every move of a log, stones alternating from
/// White. Only occupied cells are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedBoard {
    rows: usize,
    cols: usize,
    stones: BTreeMap<Pos, Stone>,
}

impl ReducedBoard {
    /// `(rows, cols)` as `(max_row + 1, max_col + 1)` of the log
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(self.stones.get(&pos).copied().unwrap_or(Stone::Empty))
    }
}

/// Translate a log so its smallest row and column become zero
pub fn reduce_log(log: &[Pos]) -> Vec<Pos> {
    let (Some(min_row), Some(min_col)) = (
        log.iter().map(|p| p.row).min(),
        log.iter().map(|p| p.col).min(),
    ) else {
        return Vec::new();
    };
    log.iter()
        .map(|p| Pos::new(p.row - min_row, p.col - min_col))
        .collect()
}

/// Replay a log onto the smallest grid that holds it.
///
/// A cell played twice keeps the later stone. Extents saturate at
/// `usize::MAX`.
pub fn make_board(log: &[Pos]) -> ReducedBoard {
    let rows = log.iter().map(|p| p.row.saturating_add(1)).max().unwrap_or(0);
    let cols = log.iter().map(|p| p.col.saturating_add(1)).max().unwrap_or(0);

    let mut stones = BTreeMap::new();
    let mut stone = Stone::FIRST;
    for &pos in log {
        stones.insert(pos, stone);
        stone = stone.opponent();
    }
    ReducedBoard { rows, cols, stones }
}

/// Length of the shortest prefix of `old` that reproduces the position of
/// `new`, up to translation.
pub fn match_log(old: &[Pos], new: &[Pos]) -> Option<usize> {
    let target = make_board(&reduce_log(new));
    (1..=old.len()).find(|&len| make_board(&reduce_log(&old[..len])) == target)
}

/// Move `old[new.len() + 1]` expressed in the frame of `new`.
///
/// The offset between the frames is the difference of the grid shapes of
/// `new` and of the same-length prefix of `old`. The result may be negative
/// when the stored game sits further from the origin than the live one.
pub fn remove_offset(old: &[Pos], new: &[Pos]) -> Result<(isize, isize), HistoryError> {
    let need = new.len() + 2;
    if old.len() < need {
        return Err(HistoryError::TooShort { have: old.len(), need });
    }

    let (new_rows, new_cols) = make_board(new).shape();
    let (old_rows, old_cols) = make_board(&old[..new.len()]).shape();
    let reply = old[new.len() + 1];

    let shift = |value: usize, to: usize, from: usize| -> Option<isize> {
        isize::try_from(value)
            .ok()?
            .checked_add(isize::try_from(to).ok()?)?
            .checked_sub(isize::try_from(from).ok()?)
    };
    match (
        shift(reply.row, new_rows, old_rows),
        shift(reply.col, new_cols, old_cols),
    ) {
        (Some(row), Some(col)) => Ok((row, col)),
        _ => Err(HistoryError::OutOfRange(reply)),
    }
}
