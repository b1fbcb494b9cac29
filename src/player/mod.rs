//! Computer players built from rule chains
//!
//! A [`Player`] is a color plus one of the static chains of the
//! [`Difficulty`] registry. Every automated seat, including the
//! [`AdaptiveLearner`], is driven through the [`Agent`] trait.

pub mod tier;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::{PlayerError, UnknownPlayer};
use crate::learning::AdaptiveLearner;
use crate::rules::Rule;

pub use tier::Difficulty;

/// Anything that can take a turn on its own
pub trait Agent {
    fn color(&self) -> Stone;

    fn name(&self) -> &str;

    /// Place exactly one stone of [`Agent::color`] and return its cell.
    fn make_move(&mut self, board: &mut Board) -> Result<Pos, PlayerError>;
}

/// Rule-chain player
pub struct Player {
    color: Stone,
    difficulty: Difficulty,
    rules: &'static [Rule],
    rng: StdRng,
}

impl Player {
    /// Rule-chain player for a static tier.
    ///
    /// The adaptive tier is not a plain chain; build it with
    /// [`create`] or [`AdaptiveLearner::new`].
    pub fn new(difficulty: Difficulty, color: Stone) -> Self {
        debug_assert!(!difficulty.is_adaptive(), "adaptive players are built by the learner");
        Self::with_rng(difficulty, color, StdRng::from_entropy())
    }

    /// Player with a reproducible random stream
    pub fn with_seed(difficulty: Difficulty, color: Stone, seed: u64) -> Self {
        debug_assert!(!difficulty.is_adaptive(), "adaptive players are built by the learner");
        Self::with_rng(difficulty, color, StdRng::seed_from_u64(seed))
    }

    /// Chain player without the tier check, backing the adaptive learner
    pub(crate) fn with_rng(difficulty: Difficulty, color: Stone, rng: StdRng) -> Self {
        Self {
            color,
            difficulty,
            rules: difficulty.chain(),
            rng,
        }
    }

    /// First rule of the chain that finds a cell, without placing anything
    pub fn choose(&mut self, board: &Board) -> Option<(Rule, Pos)> {
        let color = self.color;
        let rules = self.rules;
        let rng = &mut self.rng;
        rules
            .iter()
            .find_map(|&rule| rule.find(board, color, rng).map(|pos| (rule, pos)))
    }
}

impl Agent for Player {
    fn color(&self) -> Stone {
        self.color
    }

    fn name(&self) -> &str {
        self.difficulty.name()
    }

    fn make_move(&mut self, board: &mut Board) -> Result<Pos, PlayerError> {
        let (rule, pos) = self.choose(board).ok_or_else(|| PlayerError::ExhaustedSearch {
            player: self.name().to_string(),
        })?;
        board.set(pos, self.color)?;
        debug!(player = self.name(), color = %self.color, rule = rule.name(), %pos, "move committed");
        Ok(pos)
    }
}

/// Who occupies a seat: a person at the GUI or a computer tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerKind {
    Human,
    Computer(Difficulty),
}

impl PlayerKind {
    /// Every selectable seat, human first
    pub fn all() -> impl Iterator<Item = PlayerKind> {
        std::iter::once(PlayerKind::Human).chain(Difficulty::ALL.into_iter().map(PlayerKind::Computer))
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Computer(difficulty) => difficulty.name(),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerKind {
    type Err = UnknownPlayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Human" {
            return Ok(PlayerKind::Human);
        }
        s.parse().map(PlayerKind::Computer)
    }
}

impl TryFrom<String> for PlayerKind {
    type Error = UnknownPlayer;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<PlayerKind> for String {
    fn from(kind: PlayerKind) -> Self {
        kind.name().to_string()
    }
}

/// Build the automated agent for a computer seat.
///
/// Only the adaptive tier touches the filesystem, reading its history file
/// from the configured directory.
pub fn create(
    difficulty: Difficulty,
    color: Stone,
    config: &GameConfig,
) -> Result<Box<dyn Agent>, PlayerError> {
    if difficulty.is_adaptive() {
        let learner = AdaptiveLearner::new(color, &config.learner)?;
        return Ok(Box::new(learner));
    }
    Ok(Box::new(Player::new(difficulty, color)))
}
