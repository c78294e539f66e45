//! Names command implementation.

use super::models::NamesArgs;
use crate::aggregator::{render_name_changes, track_name_changes};
use crate::parser::{load_history, History};
use crate::utils::error::HistoryError;
use anyhow::{Context, Result};
use log::info;

/// Execute the names command: print every player's name history
///
/// **Public** - main entry point called from main.rs
pub fn execute_names(args: NamesArgs) -> Result<()> {
    let history = load_history(&args.history_dir).with_context(|| {
        format!("Failed to load history from {}", args.history_dir.display())
    })?;

    let report = build_name_report(&history).context("Failed to track name changes")?;

    println!("{}", report);
    Ok(())
}

/// `name1 -> name2 -> ...` per player, in order of first appearance
pub fn build_name_report(history: &History) -> Result<String, HistoryError> {
    let changes = track_name_changes(history, &history.player_universe())?;

    let renamed = changes.iter().filter(|c| c.has_changed()).count();
    info!("{} of {} players changed name", renamed, changes.len());

    Ok(render_name_changes(&changes))
}
