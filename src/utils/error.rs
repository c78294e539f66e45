//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a single save document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid save format: {0}")]
    InvalidFormat(String),

    #[error("Invalid snapshot timestamp in {file}: {reason}")]
    InvalidTimestamp { file: String, reason: String },
}

/// Errors that can occur while loading or reading a snapshot history
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Cannot read history directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read snapshot {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid snapshot {}: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        source: ParseError,
    },

    #[error("No snapshots found in {}", .0.display())]
    Empty(PathBuf),

    #[error(
        "Duplicate snapshot timestamp {timestamp}: {} collides with {}",
        .path.display(),
        .existing.display()
    )]
    DuplicateTimestamp {
        timestamp: u64,
        path: PathBuf,
        existing: PathBuf,
    },

    #[error("Player {player} is missing from snapshot {timestamp}")]
    MissingPlayer { player: String, timestamp: u64 },
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart has no data points")]
    EmptySeries,

    #[error("Series length mismatch: expected {expected} points, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Failed to rasterize chart: {0}")]
    Rasterize(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid save file {}: {source}", .path.display())]
    InvalidSave { path: PathBuf, source: ParseError },

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
