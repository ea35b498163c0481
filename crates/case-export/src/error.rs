//! Error types for case export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while encoding or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Export file could not be written.
    #[error("failed to write export {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be serialized as JSON.
    #[error("failed to serialize records as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
