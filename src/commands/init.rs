//! Init command implementation.
//!
//! Generates a fresh roster with random identifiers and writes it as the
//! starting save of a new game session.

use super::models::InitArgs;
use crate::output::write_roster;
use crate::roster::generate_roster;
use anyhow::{Context, Result};
use log::{info, warn};

/// Execute the init command
///
/// **Public** - main entry point called from main.rs
///
/// Not deterministic: every run draws new identifiers.
pub fn execute_init(args: InitArgs) -> Result<()> {
    if args.output.exists() {
        warn!("Overwriting existing save: {}", args.output.display());
    }

    let roster = generate_roster(&mut rand::thread_rng());

    write_roster(&roster, &args.output)
        .with_context(|| format!("Failed to write save file {}", args.output.display()))?;

    info!("✓ Fresh roster written to: {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::read_roster;
    use crate::utils::config::ROSTER_SIZE;

    #[test]
    fn test_execute_init_writes_roster() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("save.json");

        execute_init(InitArgs { output: output.clone() }).unwrap();

        let roster = read_roster(&output).unwrap();
        assert_eq!(roster.len(), ROSTER_SIZE);
    }
}
