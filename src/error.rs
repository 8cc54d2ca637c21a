use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Unknown form variant \"{input}\" (expected full or short)")]
    InvalidForm { input: String },

    #[error("No application found for username \"{username}\"")]
    ApplicationNotFound { username: String },

    #[error("Cannot determine a data directory; pass --database and --sessions explicitly")]
    NoDataDir,

    #[error("Failed to parse {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Failures reported by an application store.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("Failed to create database directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Database query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Database connection is unavailable")]
    Unavailable,
}
