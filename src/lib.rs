//! Gomoku with rule-based and adaptive computer players
//!
//! Two players take turns placing stones on a rectangular grid, White
//! first. Five stones of one color in a row, column or diagonal win.
//!
//! # Architecture
//!
//! - [`board`]: Board state, turn tracking, move log and line extraction
//! - [`rules`]: Win detection and the heuristic pattern rules
//! - [`player`]: Rule-chain players and the difficulty registry
//! - [`learning`]: The adaptive player and its history files
//! - [`game`]: Headless game loop
//! - [`config`]: Game configuration
//! - [`ui`]: Desktop front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{play_game, Board, Difficulty, Player, Stone};
//!
//! let mut board = Board::new(9, 9);
//! let mut white = Player::with_seed(Difficulty::Hard, Stone::White, 1);
//! let mut black = Player::with_seed(Difficulty::Easy, Stone::Black, 2);
//!
//! let outcome = play_game(&mut white, &mut black, &mut board).unwrap();
//! match outcome.winner_stone() {
//!     Some(stone) => println!("{stone} wins after {} moves", board.log().len()),
//!     None => println!("Draw"),
//! }
//! ```
//!
//! # Computer players
//!
//! Every tier runs a fixed chain of rules and plays the first cell a rule
//! finds. The adaptive tier additionally replays the winning reply of any
//! stored game it lost from the same position, and stores the current game
//! when it is about to lose.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod learning;
pub mod player;
pub mod rules;
pub mod ui;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone};
pub use config::GameConfig;
pub use error::{HistoryError, MoveError, PlayerError, StorageError};
pub use game::{play_game, GameOutcome};
pub use learning::{AdaptiveLearner, LearnerConfig};
pub use player::{Agent, Difficulty, Player, PlayerKind};
pub use rules::{find_winner, Five, Rule};
