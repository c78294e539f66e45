//! Per-player time series of a statistic across a history.
//!
//! Every player of the universe must be present in every snapshot; a gap is
//! reported as `HistoryError::MissingPlayer` instead of being filled in.

use crate::parser::history::History;
use crate::parser::schema::{PlayerId, StatField};
use crate::utils::error::HistoryError;
use log::debug;

/// Values of one field for one player, in snapshot order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub player: PlayerId,
    pub values: Vec<i64>,
}

/// Values of `field` for `player` across every snapshot of the history
///
/// **Public** - building block of the graph report
///
/// # Errors
/// * `HistoryError::MissingPlayer` - the player is absent from a snapshot
pub fn extract_series(
    history: &History,
    player: &PlayerId,
    field: StatField,
) -> Result<Vec<i64>, HistoryError> {
    history
        .snapshots()
        .iter()
        .map(|snapshot| snapshot.player(player).map(|stats| stats.get(field)))
        .collect()
}

/// One series per universe entry, in universe order
pub fn extract_all_series(
    history: &History,
    universe: &[PlayerId],
    field: StatField,
) -> Result<Vec<Series>, HistoryError> {
    debug!(
        "Extracting {} series for {} players over {} snapshots",
        field,
        universe.len(),
        history.len()
    );

    universe
        .iter()
        .map(|player| -> Result<Series, HistoryError> {
            Ok(Series {
                player: player.clone(),
                values: extract_series(history, player, field)?,
            })
        })
        .collect()
}

/// Display name of each universe entry as of the final snapshot
pub fn final_labels(history: &History, universe: &[PlayerId]) -> Result<Vec<String>, HistoryError> {
    let last = history.last();
    universe
        .iter()
        .map(|player| last.player(player).map(|stats| stats.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::history::Snapshot;
    use crate::parser::schema::{PlayerStats, Roster};

    fn roster(entries: &[(&str, &str, i64)]) -> Roster {
        entries
            .iter()
            .map(|(id, name, score)| {
                let mut stats = PlayerStats::new(*name);
                stats.score = *score;
                (PlayerId::from(*id), stats)
            })
            .collect()
    }

    #[test]
    fn test_extract_series() {
        let history = History::new("history", vec![
            Snapshot::new(1, roster(&[("p1", "A", 3)])),
            Snapshot::new(2, roster(&[("p1", "A", 7)])),
        ])
        .unwrap();

        let series = extract_series(&history, &"p1".into(), StatField::Score).unwrap();
        assert_eq!(series, vec![3, 7]);
    }

    #[test]
    fn test_extract_series_missing_player() {
        let history = History::new("history", vec![
            Snapshot::new(1, roster(&[("p1", "A", 3)])),
            Snapshot::new(2, roster(&[("p1", "A", 7), ("p2", "B", 1)])),
        ])
        .unwrap();

        let err = extract_series(&history, &"p2".into(), StatField::Score).unwrap_err();
        assert!(matches!(err, HistoryError::MissingPlayer { timestamp: 1, .. }));
    }

    #[test]
    fn test_extract_all_series_and_labels() {
        let history = History::new("history", vec![
            Snapshot::new(10, roster(&[("p1", "A", 1), ("p2", "B", 2)])),
            Snapshot::new(20, roster(&[("p2", "Bee", 5), ("p1", "A", 4)])),
        ])
        .unwrap();
        let universe = history.player_universe();

        let all = extract_all_series(&history, &universe, StatField::Score).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].player.as_str(), "p1");
        assert_eq!(all[0].values, vec![1, 4]);
        assert_eq!(all[1].values, vec![2, 5]);

        let labels = final_labels(&history, &universe).unwrap();
        assert_eq!(labels, vec!["A".to_string(), "Bee".to_string()]);
    }
}
