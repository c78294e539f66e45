//! Leaderboard command implementation.

use super::models::LeaderboardArgs;
use crate::aggregator::{build_leaderboards, render_leaderboards};
use crate::output::read_roster;
use crate::parser::{Roster, StatField};
use anyhow::{Context, Result};

/// Execute the leaderboard command: print every tracked field's ranking
///
/// **Public** - main entry point called from main.rs
pub fn execute_leaderboard(args: LeaderboardArgs) -> Result<()> {
    let roster = read_roster(&args.save)
        .with_context(|| format!("Failed to read save file {}", args.save.display()))?;

    println!("{}", build_leaderboard_report(&roster));
    Ok(())
}

/// Leaderboards of every field in `StatField::ALL`
pub fn build_leaderboard_report(roster: &Roster) -> String {
    render_leaderboards(&build_leaderboards(roster, &StatField::ALL))
}
