//! Board files: a JSON snapshot of a wall the CLI can operate on.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wall::doc::Item;

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid board file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// `{ "board_width": 800, "items": [...] }`. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_width: Option<f64>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl BoardFile {
    pub fn parse(raw: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let raw = std::fs::read_to_string(path).map_err(|source| BoardError::Read { path: path.to_path_buf(), source })?;
        let board = Self::parse(&raw)?;
        tracing::debug!(path = %path.display(), items = board.items.len(), "board loaded");
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
