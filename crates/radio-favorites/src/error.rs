//! Error types for favorites storage

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FavoritesError {
    /// Name does not match `[A-Za-z0-9_-]+`.
    #[error("Invalid list name: {0:?}")]
    InvalidName(String),

    #[error("List already exists: {0}")]
    AlreadyExists(String),

    #[error("List not found: {name} (expected at {path:?})")]
    NotFound { name: String, path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FavoritesError>;
