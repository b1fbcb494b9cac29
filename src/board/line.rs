//! Fixed-length windows over the board
//!
//! A [`Line`] is an owned snapshot of `N` consecutive cells together with the
//! coordinates they were read from. Every scan returns a fresh value, so
//! rules can hold several lines at once without aliasing.

use super::{Board, Pos, Stone};

/// Scan directions, in the order every full-board scan visits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Row,
    /// Top to bottom along a column
    Column,
    /// Upper-left to lower-right
    DiagonalDown,
    /// Lower-left to upper-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) step between consecutive cells
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Row => (0, 1),
            Direction::Column => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// `N` consecutive cells starting at an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<const N: usize> {
    pub direction: Direction,
    pub cells: [Stone; N],
    pub positions: [Pos; N],
}

impl<const N: usize> Line<N> {
    /// Number of cells holding `stone`
    #[inline]
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// Indices of the cells holding `stone`
    pub fn indices_of(&self, stone: Stone) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, s)| **s == stone)
            .map(|(i, _)| i)
    }

    /// Coordinates of the cells holding `stone`
    pub fn positions_of(&self, stone: Stone) -> Vec<Pos> {
        self.indices_of(stone).map(|i| self.positions[i]).collect()
    }

    /// True when all cells hold the same non-empty stone
    #[inline]
    pub fn is_five_of_a_kind(&self) -> bool {
        let first = self.cells[0];
        first != Stone::Empty && self.cells.iter().all(|&s| s == first)
    }
}

impl Board {
    /// Window of `N` cells from `anchor` along `direction`.
    ///
    /// Returns `None` if any cell of the window lies off the board; partial
    /// windows are never produced.
    pub fn line<const N: usize>(&self, anchor: Pos, direction: Direction) -> Option<Line<N>> {
        let (dr, dc) = direction.delta();
        let mut cells = [Stone::Empty; N];
        let mut positions = [anchor; N];
        for i in 0..N {
            let pos = anchor.offset(dr * i as isize, dc * i as isize)?;
            cells[i] = self.get(pos)?;
            positions[i] = pos;
        }
        Some(Line {
            direction,
            cells,
            positions,
        })
    }

    /// All in-range windows of length `N`.
    ///
    /// Anchors are visited row-major (rows outer, columns inner); for each
    /// anchor the directions follow [`Direction::ALL`]. Rules and the winner
    /// check depend on this order.
    pub fn lines<const N: usize>(&self) -> impl Iterator<Item = Line<N>> + '_ {
        self.positions().flat_map(move |anchor| {
            Direction::ALL
                .into_iter()
                .filter_map(move |direction| self.line::<N>(anchor, direction))
        })
    }
}
