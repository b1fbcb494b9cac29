//! Error types shared across the crate

use std::io;

use thiserror::Error;

use crate::board::{Pos, Stone};

/// Illegal placement rejected by [`Board::set`](crate::Board::set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Position {0} is already taken")]
    Occupied(Pos),
    #[error("{0} is in turn")]
    WrongTurn(Stone),
    #[error("Position {0} is outside the board")]
    OutOfBounds(Pos),
}

/// Failure of an automated player to complete its turn
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Move(#[from] MoveError),
    /// No rule, fallback or random search found an empty cell. The driving
    /// loop must check [`Board::is_full`](crate::Board::is_full) first.
    #[error("Player \"{player}\" could not find any valid move")]
    ExhaustedSearch { player: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A stored history cannot be aligned with the live game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history has {have} moves, need at least {need}")]
    TooShort { have: usize, need: usize },
    #[error("stored reply {0} cannot be translated onto the board")]
    OutOfRange(Pos),
}

/// Reading or writing a persisted history file failed
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("history file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("history file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Loading the game configuration failed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("config file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Lookup of a player type by display name failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{0}\" is not a registered player type")]
pub struct UnknownPlayer(pub String);
