//! Persistent storage
//!
//! This module handles persistence of the editable portfolio content as
//! per-collection JSON files under the platform data directory.

pub mod content;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Storage layer errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not resolve application data directory")]
    DataDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Get the application data directory, creating it if needed
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    let dirs = ProjectDirs::from("com", "sterling", "Sterling").ok_or(StorageError::DataDir)?;
    let dir = dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Directory holding the per-collection content files
pub fn content_dir() -> Result<PathBuf, StorageError> {
    let dir = get_data_dir()?.join("content");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
