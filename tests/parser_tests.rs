use roster_stats::parser::{load_history, parse_snapshot, parse_timestamp, StatField};
use roster_stats::utils::error::HistoryError;
use std::fs;
use std::path::Path;

fn save_json(entries: &[(&str, &str, i64)]) -> String {
    let players: Vec<String> = entries
        .iter()
        .map(|(id, name, score)| {
            format!(
                r#""{}": {{"name": "{}", "score": {}, "kills": 0, "wins": 0, "chests": 0, "segfaults": 0}}"#,
                id, name, score
            )
        })
        .collect();
    format!(r#"{{"players": {{{}}}}}"#, players.join(", "))
}

fn write(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join(file), content).unwrap();
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

#[test]
fn test_load_history_orders_by_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "save_10", &save_json(&[("p1", "A", 10)]));
    write(dir.path(), "save_5", &save_json(&[("p1", "A", 5)]));
    write(dir.path(), "save_20", &save_json(&[("p1", "A", 20)]));

    let history = load_history(dir.path()).unwrap();

    assert_eq!(history.timestamps(), vec![5, 10, 20]);
    let scores: Vec<i64> = history
        .snapshots()
        .iter()
        .map(|s| s.roster.get(&"p1".into()).unwrap().get(StatField::Score))
        .collect();
    assert_eq!(scores, vec![5, 10, 20]);
}

#[test]
fn test_load_history_accepts_json_extension_and_skips_others() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "save_1718000000.json", &save_json(&[("p1", "A", 1)]));
    write(dir.path(), "README.md", "not a snapshot");
    fs::create_dir(dir.path().join("archive")).unwrap();

    let history = load_history(dir.path()).unwrap();

    assert_eq!(history.timestamps(), vec![1718000000]);
}

#[test]
fn test_load_history_bad_timestamp_aborts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "save_1", &save_json(&[("p1", "A", 1)]));
    write(dir.path(), "save_latest", &save_json(&[("p1", "A", 2)]));

    let err = load_history(dir.path()).unwrap_err();

    assert!(matches!(err, HistoryError::Snapshot { .. }));
    assert!(err.to_string().contains("save_latest"));
}

#[test]
fn test_load_history_malformed_snapshot_aborts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "save_1", &save_json(&[("p1", "A", 1)]));
    write(dir.path(), "save_2", r#"{"teams": {}}"#);

    let err = load_history(dir.path()).unwrap_err();

    assert!(matches!(err, HistoryError::Snapshot { .. }));
}

#[test]
fn test_load_history_empty_dir() {
    let dir = tempfile::tempdir().unwrap();

    write(dir.path(), "notes.txt", "nothing to see");

    let err = load_history(dir.path()).unwrap_err();

    assert!(matches!(err, HistoryError::Empty(ref path) if path == dir.path()));
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}

#[test]
fn test_load_history_duplicate_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "save_3", &save_json(&[("p1", "A", 1)]));
    write(dir.path(), "save_3.json", &save_json(&[("p1", "A", 1)]));

    let err = load_history(dir.path()).unwrap_err();

    match &err {
        HistoryError::DuplicateTimestamp {
            timestamp,
            path,
            existing,
        } => {
            assert_eq!(*timestamp, 3);
            let mut names = vec![file_name(path), file_name(existing)];
            names.sort();
            assert_eq!(names, vec!["save_3", "save_3.json"]);
        }
        other => panic!("expected a duplicate timestamp error, got {:?}", other),
    }
    assert!(err.to_string().contains("save_3.json"));
}

#[test]
fn test_load_history_missing_dir() {
    let result = load_history("/definitely/not/a/history");
    assert!(matches!(result, Err(HistoryError::ReadDir { .. })));
}

#[test]
fn test_parse_snapshot_and_timestamp() {
    let roster = parse_snapshot(&save_json(&[("p1", "A", 4), ("p2", "B", 2)])).unwrap();
    assert_eq!(roster.len(), 2);

    assert_eq!(parse_timestamp(Path::new("save_77")).unwrap(), 77);
    assert!(parse_timestamp(Path::new("save_7x")).is_err());
}
