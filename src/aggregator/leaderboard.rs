//! Per-statistic leaderboards for a single snapshot.
//!
//! Players are ranked by descending value; players at exactly zero are left
//! out. Ties keep the order of the save document (stable sort).

use crate::parser::schema::{PlayerId, Roster, StatField};
use log::debug;

/// One ranked line of a leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player: PlayerId,
    pub name: String,
    pub value: i64,
}

/// Ranked players for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    pub field: StatField,
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Header line followed by `\t<name> - <value> <field>` lines
    pub fn render(&self) -> String {
        let mut out = format!("{}:", self.field);
        for entry in &self.entries {
            out.push_str(&format!(
                "\n\t{} - {} {}",
                entry.name, entry.value, self.field
            ));
        }
        out
    }
}

/// Rank the players of a roster by one field
///
/// **Public** - building block of the leaderboard report
pub fn rank_by_field(roster: &Roster, field: StatField) -> Leaderboard {
    let mut entries: Vec<LeaderboardEntry> = roster
        .iter()
        .filter(|(_, stats)| stats.get(field) != 0)
        .map(|(id, stats)| LeaderboardEntry {
            player: id.clone(),
            name: stats.name.clone(),
            value: stats.get(field),
        })
        .collect();

    // sort_by is stable: equal values stay in document order
    entries.sort_by(|a, b| b.value.cmp(&a.value));

    debug!("{} leaderboard: {} ranked players", field, entries.len());

    Leaderboard { field, entries }
}

/// Leaderboards for every field of `fields`, in that order
pub fn build_leaderboards(roster: &Roster, fields: &[StatField]) -> Vec<Leaderboard> {
    fields
        .iter()
        .map(|field| rank_by_field(roster, *field))
        .collect()
}

/// Full report: each board preceded by a blank line
pub fn render_leaderboards(boards: &[Leaderboard]) -> String {
    boards
        .iter()
        .map(|board| format!("\n{}", board.render()))
        .collect::<Vec<_>>()
        .join("\n")
}
