//! Pattern catalog for the heuristic players
//!
//! Every rule scans the board windows in the order of [`Board::lines`] and
//! answers with one empty cell of the first matching window, or `None` if no
//! window matches. Rules never mutate the board; the calling player commits
//! the returned cell.
//!
//! Notation in the docs below: `O` own stone, `X` opponent stone, `_` empty.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Line, Pos, Stone};

const E: Stone = Stone::Empty;

/// `OOOO_` in any arrangement: complete the five.
pub fn win_if_possible(board: &Board, color: Stone) -> Option<Pos> {
    four_with_gap(board, color)
}

/// `XXXX_` in any arrangement: take the opponent's winning cell.
pub fn block_open_four(board: &Board, color: Stone) -> Option<Pos> {
    four_with_gap(board, color.opponent())
}

/// Six-cell window `_ ? ? ? ? _` whose interior holds three own stones and
/// one gap: fill the gap for a four that is open on both ends.
pub fn extend_three_to_doubly_open_four(board: &Board, color: Stone) -> Option<Pos> {
    three_inside_open_ends(board, color)
}

/// Same shape as [`extend_three_to_doubly_open_four`] for the opponent.
pub fn block_to_doubly_open_four(board: &Board, color: Stone) -> Option<Pos> {
    three_inside_open_ends(board, color.opponent())
}

/// Exactly `_ X X X _`: close the leading end.
pub fn block_doubly_open_three(board: &Board, color: Stone) -> Option<Pos> {
    let x = color.opponent();
    board
        .lines::<5>()
        .find_map(|line| (line.cells == [E, x, x, x, E]).then_some(line.positions[0]))
}

/// Three opponent stones and two gaps: take the gap nearest to them.
pub fn block_open_three(board: &Board, color: Stone) -> Option<Pos> {
    three_with_two_gaps(board, color.opponent())
}

/// Three own stones and two gaps: take the gap nearest to them.
pub fn extend_three_to_four(board: &Board, color: Stone) -> Option<Pos> {
    three_with_two_gaps(board, color)
}

/// `_ X X _ _` or `_ _ X X _`: take the far-side gap that would turn the
/// pair into an open three.
pub fn block_doubly_open_two(board: &Board, color: Stone) -> Option<Pos> {
    let x = color.opponent();
    board.lines::<5>().find_map(|line| match line.cells {
        [E, a, b, E, E] if a == x && b == x => Some(line.positions[3]),
        [E, E, a, b, E] if a == x && b == x => Some(line.positions[1]),
        _ => None,
    })
}

/// Two adjacent opponent stones and three gaps: play next to the pair on
/// the side with more room (right side on a tie).
pub fn block_open_two(board: &Board, color: Stone) -> Option<Pos> {
    let x = color.opponent();
    board.lines::<5>().find_map(|line| {
        if line.count(E) != 3 {
            return None;
        }
        let pair: Vec<usize> = line.indices_of(x).collect();
        match pair[..] {
            [k, next] if next == k + 1 => {
                let room_left = k;
                let room_right = line.cells.len() - (k + 2);
                let idx = if room_right >= room_left { k + 2 } else { k - 1 };
                Some(line.positions[idx])
            }
            _ => None,
        }
    })
}

/// Two own stones and three gaps: take one of the gaps at random.
pub fn extend_two_to_three<R: Rng + ?Sized>(board: &Board, color: Stone, rng: &mut R) -> Option<Pos> {
    let line = board
        .lines::<5>()
        .find(|line| line.count(color) == 2 && line.count(E) == 3)?;
    line.positions_of(E).choose(rng).copied()
}

/// A lone own stone in an otherwise empty window: play right after it, or
/// right before it when it sits at the window's end.
pub fn extend_one(board: &Board, color: Stone) -> Option<Pos> {
    board.lines::<5>().find_map(|line| {
        if line.count(color) != 1 || line.count(E) != 4 {
            return None;
        }
        let k = line.indices_of(color).next()?;
        let idx = if k + 1 < line.cells.len() { k + 1 } else { k - 1 };
        Some(line.positions[idx])
    })
}

/// Center cell if still empty
pub fn center(board: &Board) -> Option<Pos> {
    let pos = board.center();
    board.is_empty(pos).then_some(pos)
}

/// The cell one row below the center if still empty
pub fn below_center(board: &Board) -> Option<Pos> {
    let pos = board.center().offset(1, 0)?;
    board.is_empty(pos).then_some(pos)
}

/// Any empty cell, uniformly at random
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    board.empty_positions().choose(rng).copied()
}

/// First empty cell in row-major order
pub fn first_free(board: &Board) -> Option<Pos> {
    board.positions().find(|&p| board.is_empty(p))
}

fn four_with_gap(board: &Board, stone: Stone) -> Option<Pos> {
    board.lines::<5>().find_map(|line| {
        if line.count(stone) == 4 && line.count(E) == 1 {
            line.positions_of(E).first().copied()
        } else {
            None
        }
    })
}

fn three_inside_open_ends(board: &Board, stone: Stone) -> Option<Pos> {
    board.lines::<6>().find_map(|line| {
        let cells = &line.cells;
        if cells[0] != E || cells[5] != E {
            return None;
        }
        let inner = &cells[1..5];
        let stones = inner.iter().filter(|&&s| s == stone).count();
        let gaps: Vec<usize> = (1..5).filter(|&i| cells[i] == E).collect();
        match (stones, gaps.as_slice()) {
            (3, &[gap]) => Some(line.positions[gap]),
            _ => None,
        }
    })
}

fn three_with_two_gaps(board: &Board, stone: Stone) -> Option<Pos> {
    board.lines::<5>().find_map(|line| {
        if line.count(stone) == 3 && line.count(E) == 2 {
            nearest_gap(&line, stone).map(|i| line.positions[i])
        } else {
            None
        }
    })
}

/// Index of the empty cell closest to any `stone` in the line, lowest index
/// on ties
fn nearest_gap<const N: usize>(line: &Line<N>, stone: Stone) -> Option<usize> {
    let stones: Vec<usize> = line.indices_of(stone).collect();
    line.indices_of(E).min_by_key(|&gap| {
        let distance = stones.iter().map(|&s| s.abs_diff(gap)).min().unwrap_or(usize::MAX);
        (distance, gap)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::board_from_rows;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42425243212)
    }

    #[test]
    fn test_win_if_possible_row_and_gap() {
        let board = board_from_rows(&[
            "WW.WW..",
            "BBB.B..",
            ".......",
            ".......",
            ".......",
        ]);
        assert_eq!(win_if_possible(&board, Stone::White), Some(Pos::new(0, 2)));
        assert_eq!(win_if_possible(&board, Stone::Black), Some(Pos::new(1, 3)));
    }

    #[test]
    fn test_win_if_possible_column() {
        let board = board_from_rows(&[
            "WBW.......",
            ".B........",
            "W.........",
            "WB........",
            "WB........",
            "..........",
        ]);
        assert_eq!(win_if_possible(&board, Stone::Black), Some(Pos::new(2, 1)));
    }

    #[test]
    fn test_win_if_possible_diagonal() {
        let board = board_from_rows(&[
            ".....B....",
            ".......W..",
            ".B....W...",
            ".....W..B.",
            "....W.B...",
            "..........",
        ]);
        // Up-right diagonal (4,4)..(0,8) is missing (0,8)
        assert_eq!(win_if_possible(&board, Stone::White), Some(Pos::new(0, 8)));
    }

    #[test]
    fn test_win_not_possible() {
        let board = board_from_rows(&[
            ".....B....",
            ".......W..",
            ".B........",
            "..W..W..B.",
            "....W.B...",
            "..........",
        ]);
        assert_eq!(win_if_possible(&board, Stone::White), None);
        assert_eq!(win_if_possible(&board, Stone::Black), None);
    }

    #[test]
    fn test_block_open_four() {
        let board = board_from_rows(&[
            "WW.W...",
            "BBB.B..",
            ".......",
            ".......",
            "W......",
        ]);
        assert_eq!(block_open_four(&board, Stone::White), Some(Pos::new(1, 3)));
        assert_eq!(block_open_four(&board, Stone::Black), None);
    }

    #[test]
    fn test_extend_three_to_doubly_open_four() {
        let board = board_from_rows(&[
            ".WW.W..",
            ".......",
            ".......",
            "B.....B",
            "B......",
        ]);
        assert_eq!(extend_three_to_doubly_open_four(&board, Stone::White), Some(Pos::new(0, 3)));
        assert_eq!(block_to_doubly_open_four(&board, Stone::Black), Some(Pos::new(0, 3)));
        assert_eq!(block_to_doubly_open_four(&board, Stone::White), None);
    }

    #[test]
    fn test_doubly_open_four_needs_open_ends() {
        let board = board_from_rows(&[
            "BWW.W..",
            ".......",
            ".......",
            "W.....B",
            "B......",
        ]);
        // (0,0) is black and the window anchored at (0,1) starts on a white
        // stone, so no six-cell window has two open ends
        assert_eq!(extend_three_to_doubly_open_four(&board, Stone::White), None);
    }

    #[test]
    fn test_block_doubly_open_three() {
        let board = board_from_rows(&[
            ".......",
            ".BBB...",
            ".......",
            "W......",
            "W.....W",
        ]);
        assert_eq!(block_doubly_open_three(&board, Stone::White), Some(Pos::new(1, 0)));
    }

    #[test]
    fn test_block_doubly_open_three_ignores_closed_three() {
        let board = board_from_rows(&[
            ".......",
            "WBBB...",
            ".......",
            "W......",
            "......W",
        ]);
        assert_eq!(block_doubly_open_three(&board, Stone::White), None);
    }

    #[test]
    fn test_block_open_three_next_to_run() {
        let board = board_from_rows(&[
            "BBB....",
            ".......",
            "WW.....",
            ".......",
            "W......",
        ]);
        assert_eq!(block_open_three(&board, Stone::White), Some(Pos::new(0, 3)));
    }

    #[test]
    fn test_block_open_three_fills_inner_gap() {
        let board = board_from_rows(&[
            "B.BB...",
            ".......",
            "WW.....",
            ".......",
            "W......",
        ]);
        assert_eq!(block_open_three(&board, Stone::White), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_extend_three_to_four() {
        let board = board_from_rows(&[
            "WWW....",
            ".......",
            "BB.....",
            ".......",
            "B......",
        ]);
        assert_eq!(extend_three_to_four(&board, Stone::White), Some(Pos::new(0, 3)));
        assert_eq!(extend_three_to_four(&board, Stone::Black), None);
    }

    #[test]
    fn test_block_doubly_open_two_left_pair() {
        let board = board_from_rows(&[
            ".BB....",
            ".......",
            "W......",
            "W......",
            ".......",
        ]);
        assert_eq!(block_doubly_open_two(&board, Stone::White), Some(Pos::new(0, 3)));
    }

    #[test]
    fn test_block_doubly_open_two_right_pair() {
        let board = board_from_rows(&[
            "..BB...",
            ".......",
            "W......",
            "W......",
            ".......",
        ]);
        assert_eq!(block_doubly_open_two(&board, Stone::White), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_block_open_two_room_on_right() {
        let board = board_from_rows(&[
            "BB.....",
            ".......",
            "W......",
            "W......",
            ".......",
        ]);
        assert_eq!(block_open_two(&board, Stone::White), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_block_open_two_room_on_left() {
        let board = board_from_rows(&[
            ".....BB",
            ".......",
            "W......",
            "W......",
            ".......",
        ]);
        assert_eq!(block_open_two(&board, Stone::White), Some(Pos::new(0, 4)));
    }

    #[test]
    fn test_block_open_two_needs_adjacent_pair() {
        let board = board_from_rows(&[
            "B.B....",
            ".......",
            "W......",
            "W......",
            ".......",
        ]);
        assert_eq!(block_open_two(&board, Stone::White), None);
    }

    #[test]
    fn test_extend_two_to_three_picks_a_gap_of_the_window() {
        let board = board_from_rows(&[
            "WW.....",
            ".......",
            ".......",
            "B......",
            "......B",
        ]);
        let allowed = [Pos::new(0, 2), Pos::new(0, 3), Pos::new(0, 4)];
        let mut rng = create_test_rng();
        for _ in 0..20 {
            let pos = extend_two_to_three(&board, Stone::White, &mut rng).unwrap();
            assert!(allowed.contains(&pos), "{pos} is not a gap of the first window");
        }
    }

    #[test]
    fn test_extend_one_follows_stone() {
        let board = board_from_rows(&[
            ".......",
            ".......",
            "..W....",
            ".......",
            ".......",
        ]);
        // First window holding the stone is the down-right diagonal from (0,0)
        assert_eq!(extend_one(&board, Stone::White), Some(Pos::new(3, 3)));
        assert_eq!(extend_one(&board, Stone::Black), None);
    }

    #[test]
    fn test_extend_one_at_window_end() {
        let board = board_from_rows(&["....W"]);
        assert_eq!(extend_one(&board, Stone::White), Some(Pos::new(0, 3)));
    }

    #[test]
    fn test_center_and_below_center() {
        let board = board_from_rows(&[
            ".....",
            ".....",
            "..W..",
            ".....",
            ".....",
        ]);
        assert_eq!(center(&board), None);
        assert_eq!(below_center(&board), Some(Pos::new(3, 2)));

        let empty = Board::new(4, 10);
        assert_eq!(center(&empty), Some(Pos::new(5, 2)));
    }

    #[test]
    fn test_random_move_only_picks_empty_cells() {
        let board = board_from_rows(&["WBW", "BW.", "B.."]);
        let mut rng = create_test_rng();
        for _ in 0..20 {
            let pos = random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_full_board_has_no_fallback() {
        let board = board_from_rows(&["WBW", "BWB", "WBW"]);
        let mut rng = create_test_rng();
        assert_eq!(random_move(&board, &mut rng), None);
        assert_eq!(first_free(&board), None);
        assert_eq!(center(&board), None);
    }

    #[test]
    fn test_first_free_is_row_major() {
        let board = board_from_rows(&["WB.", "..."]);
        assert_eq!(first_free(&board), Some(Pos::new(0, 2)));
    }
}
