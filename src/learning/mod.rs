//! Computer player that learns from its own losses
//!
//! The learner plays the hard chain, but first looks through the games it
//! lost before. When the live game reproduces the start of a stored loss,
//! it takes the cell the opponent won with back then. Once per lifetime,
//! when its own move leaves the opponent a winning cell, the game so far
//! plus that cell is stored for next time.

pub mod history;
pub mod storage;

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::error::{PlayerError, StorageError};
use crate::player::{Agent, Difficulty, Player};
use crate::rules::win_if_possible;

pub use history::{make_board, match_log, reduce_log, remove_offset, ReducedBoard};
pub use storage::HistoryStore;

/// Where the per-color history files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    pub history_dir: PathBuf,
    pub white_file: String,
    pub black_file: String,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from("."),
            white_file: "white.log".to_string(),
            black_file: "black.log".to_string(),
        }
    }
}

impl LearnerConfig {
    pub fn history_path(&self, color: Stone) -> PathBuf {
        let file = match color {
            Stone::White => &self.white_file,
            _ => &self.black_file,
        };
        self.history_dir.join(file)
    }
}

pub struct AdaptiveLearner {
    player: Player,
    store: HistoryStore,
    histories: Vec<Vec<Pos>>,
    check_histories: bool,
}

impl AdaptiveLearner {
    /// Load the history of `color` and build the learner around it
    pub fn new(color: Stone, config: &LearnerConfig) -> Result<Self, StorageError> {
        Self::with_player(Player::with_rng(Difficulty::Adaptive, color, StdRng::from_entropy()), config)
    }

    pub fn with_seed(color: Stone, config: &LearnerConfig, seed: u64) -> Result<Self, StorageError> {
        let rng = StdRng::seed_from_u64(seed);
        Self::with_player(Player::with_rng(Difficulty::Adaptive, color, rng), config)
    }

    fn with_player(player: Player, config: &LearnerConfig) -> Result<Self, StorageError> {
        let store = HistoryStore::new(config.history_path(player.color()));
        let histories = store.load()?;
        debug!(path = %store.path().display(), count = histories.len(), "histories loaded");
        Ok(Self {
            player,
            store,
            histories,
            check_histories: true,
        })
    }

    pub fn histories(&self) -> &[Vec<Pos>] {
        &self.histories
    }

    /// False once a loss has been recorded
    pub fn is_checking_histories(&self) -> bool {
        self.check_histories
    }

    /// Reply stored for the current position, translated onto the live
    /// board. Histories whose reply does not land on an empty cell are
    /// skipped.
    pub fn stop_old_mistake(&self, board: &Board) -> Option<Pos> {
        let current = board.log();
        if !self.check_histories || current.is_empty() || self.histories.is_empty() {
            return None;
        }

        self.histories.iter().enumerate().find_map(|(index, old)| {
            match_log(old, current)?;
            let (row, col) = match remove_offset(old, current) {
                Ok(cell) => cell,
                Err(e) => {
                    debug!(index, error = %e, "skipping stored history");
                    return None;
                }
            };
            let pos = Pos::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?);
            if !board.is_empty(pos) {
                debug!(index, %pos, "stored reply is not playable");
                return None;
            }
            Some(pos)
        })
    }

    /// Record the game if the opponent can now win with one stone
    fn learn_from_loss(&mut self, board: &Board) -> Result<(), StorageError> {
        let Some(winning) = win_if_possible(board, self.color().opponent()) else {
            return Ok(());
        };

        let mut log = board.log().to_vec();
        log.push(winning);
        self.store.append(&self.histories, reduce_log(&log))?;
        self.histories = self.store.load()?;
        self.check_histories = false;

        info!(
            color = %self.color(),
            path = %self.store.path().display(),
            moves = log.len(),
            "recorded losing game"
        );
        Ok(())
    }
}

impl Agent for AdaptiveLearner {
    fn color(&self) -> Stone {
        self.player.color()
    }

    fn name(&self) -> &str {
        self.player.name()
    }

    fn make_move(&mut self, board: &mut Board) -> Result<Pos, PlayerError> {
        let color = self.color();
        let view: &Board = board;
        let remembered = win_if_possible(view, color)
            .map(|pos| ("win_if_possible", pos))
            .or_else(|| self.stop_old_mistake(view).map(|pos| ("stop_old_mistake", pos)));

        let pos = match remembered {
            Some((rule, pos)) => {
                board.set(pos, color)?;
                debug!(player = self.name(), color = %color, rule, %pos, "move committed");
                pos
            }
            None => self.player.make_move(board)?,
        };

        if self.check_histories {
            self.learn_from_loss(board)?;
        }
        Ok(pos)
    }
}
