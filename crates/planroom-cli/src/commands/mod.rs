//! CLI command implementations.

pub mod config;
pub mod dependency;
pub mod role;
pub mod stats;
pub mod task;
pub mod timeline;

use std::path::{Path, PathBuf};

use planroom_core::storage::{self, snapshot};
use planroom_core::Board;

/// Load a board from an explicit file, or the default snapshot (sample
/// board if none has been saved yet).
pub fn load_board(file: Option<&Path>) -> Result<Board, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(storage::load_board(path)?),
        None => Ok(storage::load_board_or_sample()?),
    }
}

/// Persist the board to the default snapshot location.
pub fn save_board(board: &Board) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = snapshot::default_path()?;
    storage::save_board(&path, board)?;
    Ok(path)
}
