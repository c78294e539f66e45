//! Loading of snapshot histories.
//!
//! The game server copies its save into `history/save_<unix seconds>.json`
//! every time it saves. A history directory is therefore an unordered pile of
//! snapshots; this module turns it into a sequence ordered by capture time.

use super::schema::{PlayerId, PlayerStats, Roster};
use super::snapshot::{is_snapshot_file, parse_snapshot, parse_timestamp};
use crate::utils::config::SNAPSHOT_PREFIX;
use crate::utils::error::HistoryError;
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A roster captured at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Capture time (unix seconds, taken from the filename)
    pub timestamp: u64,
    pub roster: Roster,
    /// File the snapshot was read from (`save_<timestamp>` when built in memory)
    pub path: PathBuf,
}

impl Snapshot {
    pub fn new(timestamp: u64, roster: Roster) -> Self {
        Self {
            timestamp,
            roster,
            path: PathBuf::from(format!("{}{}", SNAPSHOT_PREFIX, timestamp)),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Look up a player, failing with a named error when absent
    pub fn player(&self, id: &PlayerId) -> Result<&PlayerStats, HistoryError> {
        self.roster
            .get(id)
            .ok_or_else(|| HistoryError::MissingPlayer {
                player: id.to_string(),
                timestamp: self.timestamp,
            })
    }
}

/// Non-empty sequence of snapshots, strictly ascending by timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Build a history from snapshots in any order
    ///
    /// `dir` names where the snapshots came from and is only used in errors.
    ///
    /// # Errors
    /// * `HistoryError::Empty` - no snapshots
    /// * `HistoryError::DuplicateTimestamp` - two snapshots share a timestamp
    pub fn new(dir: impl AsRef<Path>, mut snapshots: Vec<Snapshot>) -> Result<Self, HistoryError> {
        if snapshots.is_empty() {
            return Err(HistoryError::Empty(dir.as_ref().to_path_buf()));
        }

        snapshots.sort_by_key(|snapshot| snapshot.timestamp);

        if let Some(pair) = snapshots
            .windows(2)
            .find(|pair| pair[0].timestamp == pair[1].timestamp)
        {
            return Err(HistoryError::DuplicateTimestamp {
                timestamp: pair[1].timestamp,
                path: pair[1].path.clone(),
                existing: pair[0].path.clone(),
            });
        }

        Ok(Self { snapshots })
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least one snapshot
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    pub fn last(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn timestamps(&self) -> Vec<u64> {
        self.snapshots.iter().map(|s| s.timestamp).collect()
    }

    /// Every player id seen in any snapshot, in order of first appearance
    pub fn player_universe(&self) -> Vec<PlayerId> {
        let mut seen = HashSet::new();
        self.snapshots
            .iter()
            .flat_map(|snapshot| snapshot.roster.ids())
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect()
    }
}

/// Load every snapshot of a history directory
///
/// **Public** - main entry point for the graph and name-change reports
///
/// Entries whose stem does not start with `save_` (and sub-directories) are
/// skipped. Any unreadable or malformed snapshot aborts the whole load.
///
/// # Errors
/// * `HistoryError::ReadDir` / `HistoryError::ReadFile` - I/O failure
/// * `HistoryError::Snapshot` - bad filename timestamp or bad document
/// * `HistoryError::Empty` - no snapshot files
/// * `HistoryError::DuplicateTimestamp` - e.g. both `save_5` and `save_5.json`
pub fn load_history(dir: impl AsRef<Path>) -> Result<History, HistoryError> {
    let dir = dir.as_ref();

    info!("Loading history from: {}", dir.display());

    let entries = fs::read_dir(dir).map_err(|source| HistoryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut snapshots = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| HistoryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() || !is_snapshot_file(&path) {
            debug!("Skipping non-snapshot entry: {}", path.display());
            continue;
        }

        let timestamp = parse_timestamp(&path).map_err(|source| HistoryError::Snapshot {
            path: path.clone(),
            source,
        })?;

        let text = fs::read_to_string(&path).map_err(|source| HistoryError::ReadFile {
            path: path.clone(),
            source,
        })?;

        let roster = parse_snapshot(&text).map_err(|source| HistoryError::Snapshot {
            path: path.clone(),
            source,
        })?;

        debug!(
            "Loaded snapshot {} ({} players) from {}",
            timestamp,
            roster.len(),
            path.display()
        );

        snapshots.push(Snapshot::new(timestamp, roster).with_path(path));
    }

    let history = History::new(dir, snapshots)?;

    info!(
        "Loaded {} snapshots ({} -> {})",
        history.len(),
        history.first().timestamp,
        history.last().timestamp
    );

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[&str]) -> Roster {
        ids.iter()
            .map(|id| (PlayerId::from(*id), PlayerStats::new(id.to_uppercase())))
            .collect()
    }

    #[test]
    fn test_history_sorts_by_timestamp() {
        let history = History::new("history", vec![
            Snapshot::new(20, roster(&["a"])),
            Snapshot::new(5, roster(&["a"])),
            Snapshot::new(10, roster(&["a"])),
        ])
        .unwrap();

        assert_eq!(history.timestamps(), vec![5, 10, 20]);
        assert_eq!(history.first().timestamp, 5);
        assert_eq!(history.last().timestamp, 20);
    }

    #[test]
    fn test_history_rejects_empty() {
        let err = History::new("history", vec![]).unwrap_err();
        assert!(matches!(err, HistoryError::Empty(ref dir) if dir == Path::new("history")));
    }

    #[test]
    fn test_history_rejects_duplicate_timestamp() {
        let result = History::new("history", vec![
            Snapshot::new(7, roster(&["a"])).with_path("history/save_7"),
            Snapshot::new(7, roster(&["b"])).with_path("history/save_7.json"),
        ]);
        let err = result.unwrap_err();
        assert!(matches!(err, HistoryError::DuplicateTimestamp { timestamp: 7, .. }));

        let message = err.to_string();
        assert!(message.contains("history/save_7.json collides with"));
        assert!(message.ends_with("history/save_7"));
    }

    #[test]
    fn test_player_universe_first_appearance_order() {
        let history = History::new("history", vec![
            Snapshot::new(1, roster(&["b", "a"])),
            Snapshot::new(2, roster(&["c", "a", "b"])),
        ])
        .unwrap();

        let universe: Vec<String> = history
            .player_universe()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(universe, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_snapshot_player_missing() {
        let snapshot = Snapshot::new(99, roster(&["a"]));
        let err = snapshot.player(&"zz".into()).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::MissingPlayer { ref player, timestamp: 99 } if player == "zz"
        ));
    }
}
