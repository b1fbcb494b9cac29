//! Per-color history files
//!
//! File format: a JSON array of move logs, each log an array of
//! `[row, col]` pairs, e.g. `[[[0,0],[1,1],[2,2]]]`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::board::Pos;
use crate::error::StorageError;

/// Handle to one history file on disk
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all stored logs. A file that does not exist yet holds no
    /// history.
    pub fn load(&self) -> Result<Vec<Vec<Pos>>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "history file not found, starting without history");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrite the file with `old` followed by `new`
    pub fn append(&self, old: &[Vec<Pos>], new: Vec<Pos>) -> Result<(), StorageError> {
        let mut histories = old.to_vec();
        histories.push(new);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(&histories)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
