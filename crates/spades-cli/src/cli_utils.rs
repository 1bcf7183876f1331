//! Common CLI utility functions shared across commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use spades_core::{FileStore, GameSession};
use tracing::debug;

/// Resolve the data directory: explicit flag/env, then the platform data
/// directory, then `.spades` in the working directory.
pub fn resolve_data_dir(data_dir: Option<&Path>) -> PathBuf {
    match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_dir()
            .map(|dir| dir.join("spades"))
            .unwrap_or_else(|| PathBuf::from(".spades")),
    }
}

/// Open the running game stored in `data_dir`.
pub fn open_session(data_dir: Option<&Path>) -> Result<GameSession<FileStore>> {
    let dir = resolve_data_dir(data_dir);
    debug!("Using data directory {:?}", dir);
    let store = FileStore::open(&dir)
        .with_context(|| format!("Failed to open data directory {}", dir.display()))?;
    Ok(GameSession::open(store))
}
