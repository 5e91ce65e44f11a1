mod config;
pub mod snapshot;

pub use config::{Config, TimelineConfig};
pub use snapshot::{load_board, load_board_or_sample, sample_board, save_board};

use std::path::PathBuf;

/// Returns `~/.config/planroom[-dev]/` based on PLANROOM_ENV.
///
/// Set PLANROOM_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PLANROOM_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("planroom-dev")
    } else {
        base_dir.join("planroom")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
