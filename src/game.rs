//! Headless game loop for two automated agents

use tracing::info;

use crate::board::{Board, Pos, Stone};
use crate::error::PlayerError;
use crate::player::Agent;
use crate::rules::Five;

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// `None` on a draw
    pub winner: Option<Five>,
}

impl GameOutcome {
    pub fn winner_stone(&self) -> Option<Stone> {
        self.winner.map(|five| five.stone)
    }

    /// Cells of the winning five, empty on a draw
    pub fn positions(&self) -> &[Pos] {
        match &self.winner {
            Some(five) => &five.positions,
            None => &[],
        }
    }
}

/// Alternate the agents, White first, until someone has five in a row or
/// the board is full.
pub fn play_game(
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    board: &mut Board,
) -> Result<GameOutcome, PlayerError> {
    loop {
        if let Some(five) = board.winner() {
            info!(winner = %five.stone, moves = board.log().len(), "game over");
            return Ok(GameOutcome { winner: Some(five) });
        }
        if board.is_full() {
            info!(moves = board.log().len(), "game over, draw");
            return Ok(GameOutcome { winner: None });
        }

        let agent: &mut dyn Agent = match board.in_turn() {
            Stone::White => &mut *white,
            _ => &mut *black,
        };
        agent.make_move(board)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Difficulty, Player};
    use crate::testing::positions;

    #[test]
    fn test_simple_players_fill_columns() {
        let mut board = Board::new(4, 10);
        let mut white = Player::with_seed(Difficulty::Simple, Stone::White, 0);
        let mut black = Player::with_seed(Difficulty::Simple, Stone::Black, 0);

        let outcome = play_game(&mut white, &mut black, &mut board).unwrap();

        assert_eq!(outcome.winner_stone(), Some(Stone::White));
        assert_eq!(outcome.positions(), &positions([(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]));
        for row in 0..4 {
            let cells: Vec<Stone> = (0..4).map(|col| board[Pos::new(row, col)]).collect();
            assert_eq!(cells, [Stone::White, Stone::Black, Stone::White, Stone::Black]);
        }
        assert_eq!(board[Pos::new(4, 0)], Stone::White);
        assert_eq!(board.log().len(), 17);
        assert_eq!(board.moves_left(), 40 - 17);
    }

    #[test]
    fn test_draw_on_tiny_board() {
        let mut board = Board::new(3, 3);
        let mut white = Player::with_seed(Difficulty::Hard, Stone::White, 3);
        let mut black = Player::with_seed(Difficulty::Random, Stone::Black, 4);

        let outcome = play_game(&mut white, &mut black, &mut board).unwrap();

        assert_eq!(outcome.winner, None);
        assert!(outcome.positions().is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_rule_players_finish_a_game() {
        for seed in 0..5 {
            let mut board = Board::new(9, 9);
            let mut white = Player::with_seed(Difficulty::Medium, Stone::White, seed);
            let mut black = Player::with_seed(Difficulty::Hard, Stone::Black, seed + 100);

            let outcome = play_game(&mut white, &mut black, &mut board).unwrap();

            assert_eq!(board.log().len() + board.moves_left(), 81);
            match outcome.winner {
                Some(five) => assert!(five.positions.iter().all(|&p| board[p] == five.stone)),
                None => assert!(board.is_full()),
            }
        }
    }
}
