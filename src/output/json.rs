//! Save file writer and reader.
//!
//! Rosters are written as `{"players": {...}}`, pretty-printed, in roster
//! order. Writes go through a temporary file in the destination directory
//! that is renamed into place, so an existing save is never left truncated.

use crate::parser::schema::Roster;
use crate::parser::snapshot::parse_snapshot;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Borrowed form of `SaveFile`, so writing does not clone the roster
#[derive(Serialize)]
struct SaveRef<'a> {
    players: &'a Roster,
}

/// Write a roster to a save file
///
/// **Public** - main entry point for save output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write or rename
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
pub fn write_roster(roster: &Roster, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing roster to: {}", output_path.display());

    validate_output_path(output_path)?;

    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        debug!("Creating parent directories: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
        })?;
    }

    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, &SaveRef { players: roster })?;
        writer.flush()?;
    }

    temp.persist(output_path).map_err(|e| OutputError::WriteFailed(e.error))?;

    info!(
        "Roster written successfully ({} players, {} bytes)",
        roster.len(),
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a roster from a save file
///
/// **Public** - used by the leaderboard and validate commands
///
/// # Errors
/// * `OutputError::ReadFailed` - File cannot be read
/// * `OutputError::InvalidSave` - malformed document, as reported by `parse_snapshot`
pub fn read_roster(input_path: impl AsRef<Path>) -> Result<Roster, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading roster from: {}", input_path.display());

    let text = std::fs::read_to_string(input_path).map_err(OutputError::ReadFailed)?;
    let roster = parse_snapshot(&text).map_err(|source| OutputError::InvalidSave {
        path: input_path.to_path_buf(),
        source,
    })?;

    debug!("Roster loaded: {} players", roster.len());

    Ok(roster)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
