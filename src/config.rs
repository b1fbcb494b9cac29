//! Game configuration
//!
//! Read from `gomoku.json` in the working directory, or from the file named
//! by `GOMOKU_CONFIG`. Every field is optional; a missing file means
//! defaults throughout.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Stone};
use crate::error::ConfigError;
use crate::learning::LearnerConfig;
use crate::player::{Difficulty, PlayerKind};

pub const CONFIG_FILE: &str = "gomoku.json";
pub const CONFIG_ENV: &str = "GOMOKU_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub learner: LearnerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 13,
            white: PlayerKind::Human,
            black: PlayerKind::Computer(Difficulty::Hard),
            learner: LearnerConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load from `$GOMOKU_CONFIG`, falling back to `gomoku.json`
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Seat assignment for `color`
    pub fn player(&self, color: Stone) -> PlayerKind {
        match color {
            Stone::White => self.white,
            _ => self.black,
        }
    }

    pub fn set_player(&mut self, color: Stone, kind: PlayerKind) {
        match color {
            Stone::White => self.white = kind,
            _ => self.black = kind,
        }
    }

    /// Empty board of the configured size
    pub fn new_board(&self) -> Board {
        Board::new(self.width.max(1), self.height.max(1))
    }
}
