//! Double-threat detection across crossing lines
//!
//! A window qualifies when it holds at least two stones of one color and
//! nothing but empty cells otherwise. An empty cell shared by two qualifying
//! windows of different directions serves both lines at once.
//!
//! The qualifying pattern is loose: the same stones can be counted again by
//! an overlapping window under another anchor, so a reported point is not
//! always a genuine fork. The heuristic players accept that imprecision.

use crate::board::{Board, Direction, Pos, Stone};

/// First empty cell shared by two qualifying windows of `stone` that run in
/// different directions.
///
/// Windows are visited in [`Board::lines`] order; each new window is
/// compared against all earlier ones before it is recorded.
pub fn find_fork(board: &Board, stone: Stone) -> Option<Pos> {
    let mut seen: Vec<(Direction, Vec<Pos>)> = Vec::new();

    for line in board.lines::<5>() {
        let own = line.count(stone);
        if own < 2 || own + line.count(Stone::Empty) != 5 {
            continue;
        }
        let gaps = line.positions_of(Stone::Empty);

        for (direction, earlier) in &seen {
            if *direction == line.direction {
                continue;
            }
            if let Some(&shared) = gaps.iter().find(|p| earlier.contains(p)) {
                return Some(shared);
            }
        }
        seen.push((line.direction, gaps));
    }
    None
}

/// Stop the opponent from creating two threats with one stone.
pub fn block_twice_to_three_or_more(board: &Board, color: Stone) -> Option<Pos> {
    find_fork(board, color.opponent())
}

/// Extend two own lines at once.
pub fn extend_twice_two_to_three(board: &Board, color: Stone) -> Option<Pos> {
    find_fork(board, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::board_from_rows;

    fn fork_board() -> Board {
        // White pair on row 0 and white pair in column 2 meet at (0,2)
        board_from_rows(&[
            "WW.....",
            "..W....",
            "..W....",
            ".......",
            ".......",
            ".......",
            "...B.BB",
        ])
    }

    #[test]
    fn test_extend_twice_two_to_three_takes_crossing() {
        let board = fork_board();
        assert_eq!(extend_twice_two_to_three(&board, Stone::White), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_block_twice_to_three_or_more_takes_crossing() {
        let board = fork_board();
        assert_eq!(block_twice_to_three_or_more(&board, Stone::Black), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_single_line_is_not_a_fork() {
        let board = board_from_rows(&[
            ".WW....",
            ".......",
            ".......",
            ".......",
            "B.....B",
        ]);
        // Overlapping row windows share gaps but run in the same direction
        assert_eq!(find_fork(&board, Stone::White), None);
    }

    #[test]
    fn test_blocked_window_does_not_qualify() {
        let board = board_from_rows(&[
            "WWB....",
            "B.W....",
            "..W....",
            ".......",
            "......B",
        ]);
        // Row 0 and column 2 windows through the pairs contain a black stone
        assert_eq!(find_fork(&board, Stone::White), None);
    }
}
