use anyhow::{Context, Result};
use std::path::Path;
use crate::output::read_roster;
use crate::parser::StatField;

/// Validate a save file and print a summary of its content
pub fn validate_save_file(file_path: &Path) -> Result<()> {
    println!("Validating save: {}", file_path.display());

    let roster = read_roster(file_path)
        .with_context(|| format!("Invalid save file {}", file_path.display()))?;

    println!("✓ Valid save JSON");
    println!("  Players: {}", roster.len());
    for field in StatField::ALL {
        println!("  Total {}: {}", field, roster.total(field));
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Roster Stats v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Save-file tooling for game events: rosters, graphs, name changes and leaderboards.");
}
