//! Persistent storage
//!
//! This module handles persistence of user preferences and profile data.

pub mod settings;

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine data directory")]
    NoDataDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Get the application data directory
///
/// Windows: %APPDATA%/IrisEnergy
/// Linux: ~/.local/share/irisenergy
/// macOS: ~/Library/Application Support/com.Iris.IrisEnergy
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "Iris", "IrisEnergy")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
