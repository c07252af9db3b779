//! Error types for jsoncmplib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a comparison table
#[derive(Error, Debug)]
pub enum JsonCmpError {
    /// Failed to read a measurement file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a measurement file as JSON
    #[error("failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The top level of a measurement file is not a JSON object
    #[error("not a JSON object at top level: {0}")]
    NotAnObject(PathBuf),

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// No measurement files were found, or none of them loaded
    #[error("no JSON measurement files loaded from: {0}")]
    NoDocuments(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
