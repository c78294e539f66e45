//! PNG chart output writer.

use crate::parser::schema::StatField;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path of the chart for `field` inside `dir` (`<dir>/<field>.png`)
pub fn chart_path(dir: impl AsRef<Path>, field: StatField) -> PathBuf {
    dir.as_ref().join(format!("{}.png", field))
}

/// Write encoded PNG bytes to a file
///
/// **Public** - main entry point for chart output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_png(png: &[u8], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing PNG to: {}", output_path.display());

    validate_png_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| OutputError::InvalidPath(format!("Cannot create directory: {}", e)))?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(png)?;
    writer.flush()?;

    info!(
        "✓ {} written ({:.2} KB)",
        output_path.display(),
        png.len() as f64 / 1024.0
    );

    Ok(())
}

/// Validate output path for a chart
///
/// **Private** - internal validation
fn validate_png_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if path.extension().is_some_and(|ext| ext != "png") {
        debug!("File does not have .png extension: {}", path.display());
    }

    Ok(())
}
