//! Parsing of individual snapshot files.
//!
//! A snapshot is a save document (`{"players": {...}}`) whose capture time
//! is encoded in its filename: `save_<unix seconds>` or `save_<unix seconds>.json`.

use super::schema::{Roster, SaveFile};
use crate::utils::config::SNAPSHOT_PREFIX;
use crate::utils::error::ParseError;
use log::debug;
use std::path::Path;

/// Parse a save document into a roster
///
/// **Public** - main entry point for snapshot parsing
///
/// # Errors
/// * `ParseError::JsonError` - malformed JSON, missing `players`, missing or
///   mistyped record fields, negative counters, duplicate player ids
pub fn parse_snapshot(text: &str) -> Result<Roster, ParseError> {
    let save: SaveFile = serde_json::from_str(text)?;

    debug!("Parsed snapshot with {} players", save.players.len());

    Ok(save.players)
}

/// Check whether a path names a snapshot file (stem starts with `save_`)
pub fn is_snapshot_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.starts_with(SNAPSHOT_PREFIX))
}

/// Extract the capture timestamp from a snapshot filename
///
/// **Public** - used by the history loader
///
/// # Errors
/// * `ParseError::InvalidTimestamp` - the name is not `save_<unsigned integer>`
pub fn parse_timestamp(path: &Path) -> Result<u64, ParseError> {
    let file = path.display().to_string();

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| ParseError::InvalidTimestamp {
            file: file.clone(),
            reason: "file name is not valid UTF-8".to_string(),
        })?;

    let digits = stem
        .strip_prefix(SNAPSHOT_PREFIX)
        .ok_or_else(|| ParseError::InvalidTimestamp {
            file: file.clone(),
            reason: format!("expected a name starting with '{}'", SNAPSHOT_PREFIX),
        })?;

    digits.parse::<u64>().map_err(|e| ParseError::InvalidTimestamp {
        file,
        reason: format!("'{}' is not an unsigned integer ({})", digits, e),
    })
}
