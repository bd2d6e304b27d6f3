//! Error types for the Scatter manifest system.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while selecting and hashing manifest candidates
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while materializing manifest entries on disk
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("Failed to inspect destination {path:?}: {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove stale destination {path:?}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to link {src:?} -> {dst:?}: {source}")]
    Link {
        src: PathBuf,
        dst: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {src:?} -> {dst:?}: {source}")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Materialize error: {0}")]
    Materialize(#[from] MaterializeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write manifest output: {0}")]
    Output(#[from] std::io::Error),
}
