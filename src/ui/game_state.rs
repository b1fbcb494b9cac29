//! Game session driven by the GUI
//!
//! Holds the board and the two seats. Human seats move on clicks, computer
//! seats move one stone per call to [`Session::step`].

use tracing::{info, warn};

use crate::config::GameConfig;
use crate::game::GameOutcome;
use crate::player::{self, Agent, PlayerKind};
use crate::{Board, Pos, Stone};

pub const MSG_OPTIONS_OPEN: &str = "Close the options dialog first.";
pub const MSG_GAME_OVER: &str = "The game is already over! Start a new game first.";

/// Occupant of one color
pub enum Seat {
    Human,
    Computer(Box<dyn Agent>),
}

impl Seat {
    pub fn name(&self) -> &str {
        match self {
            Seat::Human => "Human",
            Seat::Computer(agent) => agent.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Finished(GameOutcome),
    /// A computer seat failed; the game cannot continue
    Aborted(String),
}

pub struct Session {
    pub board: Board,
    white: Seat,
    black: Seat,
    pub phase: Phase,
    pub message: Option<String>,
}

impl Session {
    /// New game with the seats selected in `config`
    pub fn new(config: &GameConfig) -> Self {
        let mut failure = None;
        let mut seat = |color: Stone| match config.player(color) {
            PlayerKind::Human => Seat::Human,
            PlayerKind::Computer(difficulty) => match player::create(difficulty, color, config) {
                Ok(agent) => Seat::Computer(agent),
                Err(e) => {
                    warn!(%color, error = %e, "could not create player");
                    failure = Some(e.to_string());
                    Seat::Human
                }
            },
        };
        let white = seat(Stone::White);
        let black = seat(Stone::Black);

        let mut session = Self::with_seats(config.new_board(), white, black);
        if let Some(error) = failure {
            session.phase = Phase::Aborted(error);
        }
        session
    }

    pub fn with_seats(board: Board, white: Seat, black: Seat) -> Self {
        info!(white = white.name(), black = black.name(), "new game");
        Self {
            board,
            white,
            black,
            phase: Phase::Playing,
            message: None,
        }
    }

    pub fn seat(&self, color: Stone) -> &Seat {
        match color {
            Stone::White => &self.white,
            _ => &self.black,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::Playing
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && matches!(self.seat(self.board.in_turn()), Seat::Human)
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && matches!(self.seat(self.board.in_turn()), Seat::Computer(_))
    }

    /// Winning five once the game is won
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match &self.phase {
            Phase::Finished(outcome) => outcome.winner.map(|five| five.positions),
            _ => None,
        }
    }

    /// Headline of the result card
    pub fn result_text(&self) -> Option<&'static str> {
        match &self.phase {
            Phase::Finished(outcome) => Some(match outcome.winner_stone() {
                Some(Stone::White) => "White wins!",
                Some(_) => "Black wins!",
                None => "Draw!",
            }),
            _ => None,
        }
    }

    /// A click on `pos` by the person at the screen
    pub fn click(&mut self, pos: Pos, options_open: bool) {
        if options_open {
            self.message = Some(MSG_OPTIONS_OPEN.to_string());
            return;
        }
        if self.is_over() {
            self.message = Some(MSG_GAME_OVER.to_string());
            return;
        }
        if !self.is_human_turn() {
            return;
        }

        let color = self.board.in_turn();
        match self.board.set(pos, color) {
            Ok(()) => {
                self.message = None;
                self.check_finished();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Let the computer seat in turn place one stone. Returns true if a
    /// stone was placed.
    pub fn step(&mut self) -> bool {
        if !self.is_computer_turn() {
            return false;
        }

        let result = match self.board.in_turn() {
            Stone::White => match &mut self.white {
                Seat::Computer(agent) => agent.make_move(&mut self.board),
                Seat::Human => return false,
            },
            _ => match &mut self.black {
                Seat::Computer(agent) => agent.make_move(&mut self.board),
                Seat::Human => return false,
            },
        };

        match result {
            Ok(_) => {
                self.check_finished();
                true
            }
            Err(e) => {
                warn!(error = %e, "computer player failed");
                self.phase = Phase::Aborted(e.to_string());
                false
            }
        }
    }

    fn check_finished(&mut self) {
        let winner = self.board.winner();
        if winner.is_some() || self.board.is_full() {
            let outcome = GameOutcome { winner };
            info!(winner = ?outcome.winner_stone(), moves = self.board.log().len(), "game over");
            self.phase = Phase::Finished(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Difficulty, Player};

    fn computer(difficulty: Difficulty, color: Stone) -> Seat {
        Seat::Computer(Box::new(Player::with_seed(difficulty, color, 5)))
    }

    #[test]
    fn test_human_against_simple() {
        let mut session = Session::with_seats(Board::new(6, 6), Seat::Human, computer(Difficulty::Simple, Stone::Black));
        assert!(session.is_human_turn());
        assert!(!session.step());

        session.click(Pos::new(2, 2), false);
        assert_eq!(session.board[Pos::new(2, 2)], Stone::White);
        assert!(session.is_computer_turn());

        assert!(session.step());
        assert_eq!(session.board[Pos::new(0, 0)], Stone::Black);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_illegal_click_is_reported() {
        let mut session = Session::with_seats(Board::new(5, 5), Seat::Human, Seat::Human);
        session.click(Pos::new(1, 1), false);
        session.click(Pos::new(1, 1), false);

        assert_eq!(session.message.as_deref(), Some("Position (1, 1) is already taken"));
        assert_eq!(session.board.log().len(), 1);
        assert_eq!(session.board.in_turn(), Stone::Black);
    }

    #[test]
    fn test_click_while_options_open() {
        let mut session = Session::with_seats(Board::new(5, 5), Seat::Human, Seat::Human);
        session.click(Pos::new(0, 0), true);

        assert_eq!(session.message.as_deref(), Some(MSG_OPTIONS_OPEN));
        assert!(session.board.log().is_empty());
    }

    #[test]
    fn test_computers_play_to_the_end() {
        let mut session = Session::with_seats(
            Board::new(4, 10),
            computer(Difficulty::Simple, Stone::White),
            computer(Difficulty::Simple, Stone::Black),
        );
        while session.step() {}

        assert_eq!(session.result_text(), Some("White wins!"));
        assert_eq!(session.winning_line().map(|line| line[4]), Some(Pos::new(4, 0)));

        session.click(Pos::new(9, 3), false);
        assert_eq!(session.message.as_deref(), Some(MSG_GAME_OVER));
        assert!(session.board.is_empty(Pos::new(9, 3)));
    }

    #[test]
    fn test_draw_result() {
        let mut session = Session::with_seats(Board::new(2, 2), Seat::Human, Seat::Human);
        for pos in [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)] {
            session.click(pos, false);
        }
        assert_eq!(session.result_text(), Some("Draw!"));
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn test_new_uses_config_seats() {
        let mut config = GameConfig::default();
        config.width = 7;
        config.height = 5;
        config.set_player(Stone::White, PlayerKind::Computer(Difficulty::Medium));
        config.set_player(Stone::Black, PlayerKind::Human);

        let session = Session::new(&config);
        assert_eq!(session.seat(Stone::White).name(), "Medium");
        assert_eq!(session.seat(Stone::Black).name(), "Human");
        assert_eq!((session.board.width(), session.board.height()), (7, 5));
        assert!(session.is_computer_turn());
    }
}
