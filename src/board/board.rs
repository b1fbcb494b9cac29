//! Board structure with turn tracking and move log

use std::ops::Index;

use super::{Pos, Stone};
use crate::error::MoveError;
use crate::rules::{find_winner, Five};

/// Game board of `width` columns and `height` rows.
///
/// The board is the only mutable state of a game. Every stone goes through
/// [`Board::set`], which enforces turn order and keeps the move counter and
/// the move log in step with the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Stone>,
    in_turn: Stone,
    moves_left: usize,
    /// Accepted moves in order, one per stone on the board
    log: Vec<Pos>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        let capacity = width * height;
        Self {
            width,
            height,
            cells: vec![Stone::Empty; capacity],
            in_turn: Stone::FIRST,
            moves_left: capacity,
            log: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn capacity(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn in_turn(&self) -> Stone {
        self.in_turn
    }

    #[inline]
    pub fn moves_left(&self) -> usize {
        self.moves_left
    }

    #[inline]
    pub fn log(&self) -> &[Pos] {
        &self.log
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.log.last().copied()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Get stone at position, `None` when off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.contains(pos) {
            Some(self.cells[self.cell_index(pos)])
        } else {
            None
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Place a stone for the color in turn.
    ///
    /// On success the turn passes to the opponent, `moves_left` drops by one
    /// and the move is appended to the log. A rejected move leaves the board
    /// untouched.
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        match self.get(pos) {
            None => return Err(MoveError::OutOfBounds(pos)),
            Some(Stone::Empty) => {}
            Some(_) => return Err(MoveError::Occupied(pos)),
        }
        if stone != self.in_turn {
            return Err(MoveError::WrongTurn(self.in_turn));
        }
        debug_assert!(self.moves_left > 0);

        let idx = self.cell_index(pos);
        self.cells[idx] = stone;
        self.in_turn = stone.opponent();
        self.moves_left -= 1;
        self.log.push(pos);
        Ok(())
    }

    /// True when no empty cell is left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.moves_left == 0
    }

    /// Remove all stones and hand the first move back to White
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.in_turn = Stone::FIRST;
        self.moves_left = self.capacity();
        self.log.clear();
    }

    /// Center cell, the default opening move
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.height / 2, self.width / 2)
    }

    /// Iterate all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Pos::new(row, col)))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Pos> {
        self.positions().filter(|&p| self.is_empty(p)).collect()
    }

    /// First completed five-in-a-row, see [`find_winner`]
    pub fn winner(&self) -> Option<Five> {
        find_winner(self)
    }

    #[inline]
    fn cell_index(&self, pos: Pos) -> usize {
        pos.row * self.width + pos.col
    }
}

impl Index<Pos> for Board {
    type Output = Stone;

    fn index(&self, pos: Pos) -> &Stone {
        debug_assert!(self.contains(pos));
        &self.cells[self.cell_index(pos)]
    }
}
