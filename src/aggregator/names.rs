//! Display-name change tracking across a history.

use crate::parser::history::History;
use crate::parser::schema::PlayerId;
use crate::utils::error::HistoryError;

/// Successive distinct display names of one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameHistory {
    pub player: PlayerId,
    /// Chronological, with adjacent duplicates collapsed. Never empty.
    pub names: Vec<String>,
}

impl NameHistory {
    pub fn has_changed(&self) -> bool {
        self.names.len() > 1
    }

    pub fn current(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or_default()
    }

    /// `name1 -> name2 -> ...`
    pub fn render(&self) -> String {
        self.names.join(" -> ")
    }
}

/// Collapse each player's names over the history into a change list
///
/// **Public** - main entry point for the name-change report
///
/// Seeded with the name in the first snapshot; a name is appended whenever it
/// differs from the last recorded one, so `A, A, B, A` gives `A -> B -> A`.
///
/// # Errors
/// * `HistoryError::MissingPlayer` - a universe entry is absent from a snapshot
pub fn track_name_changes(
    history: &History,
    universe: &[PlayerId],
) -> Result<Vec<NameHistory>, HistoryError> {
    universe
        .iter()
        .map(|player| -> Result<NameHistory, HistoryError> {
            let mut names: Vec<String> = Vec::new();
            for snapshot in history.snapshots() {
                let name = &snapshot.player(player)?.name;
                if names.last() != Some(name) {
                    names.push(name.clone());
                }
            }
            Ok(NameHistory {
                player: player.clone(),
                names,
            })
        })
        .collect()
}

/// One line per player, newline-joined
pub fn render_name_changes(histories: &[NameHistory]) -> String {
    histories
        .iter()
        .map(NameHistory::render)
        .collect::<Vec<_>>()
        .join("\n")
}
