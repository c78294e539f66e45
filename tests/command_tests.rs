use roster_stats::commands::{
    build_leaderboard_report, build_name_report, execute_graphs, execute_init, render_charts,
    validate_graph_args, validate_save_file, GraphArgs, InitArgs,
};
use roster_stats::chart::ChartConfig;
use roster_stats::output::read_roster;
use roster_stats::parser::load_history;
use std::fs;
use std::path::Path;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn write_snapshot(dir: &Path, timestamp: u64, players: &[(&str, &str, i64, u32)]) {
    let entries: Vec<String> = players
        .iter()
        .map(|(id, name, score, kills)| {
            format!(
                r#""{}": {{"name": "{}", "score": {}, "kills": {}, "wins": 0, "chests": 0, "segfaults": 0}}"#,
                id, name, score, kills
            )
        })
        .collect();
    fs::write(
        dir.join(format!("save_{}.json", timestamp)),
        format!(r#"{{"players": {{{}}}}}"#, entries.join(", ")),
    )
    .unwrap();
}

#[test]
fn test_execute_graphs_writes_one_chart_per_field() {
    let history_dir = tempfile::tempdir().unwrap();
    write_snapshot(history_dir.path(), 1718000000, &[("p1", "A", 0, 0), ("p2", "B", 0, 0)]);
    write_snapshot(history_dir.path(), 1718000600, &[("p1", "A", 5, 1), ("p2", "Bee", 2, 0)]);
    let out_dir = tempfile::tempdir().unwrap();

    let args = GraphArgs {
        history_dir: history_dir.path().to_path_buf(),
        output_dir: out_dir.path().join("graphs"),
        ..Default::default()
    };
    validate_graph_args(&args).unwrap();
    execute_graphs(args).unwrap();

    for field in ["score", "kills", "wins", "chests", "segfaults"] {
        let png = fs::read(out_dir.path().join(format!("graphs/{}.png", field))).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE), "{} chart should be a PNG", field);
    }
    assert!(!out_dir.path().join("graphs/score.svg").exists());
}

#[test]
fn test_render_charts_labels_with_final_names() {
    let history_dir = tempfile::tempdir().unwrap();
    write_snapshot(history_dir.path(), 1718000000, &[("p1", "A", 0, 0), ("p2", "B", 0, 0)]);
    write_snapshot(history_dir.path(), 1718000600, &[("p1", "A", 5, 1), ("p2", "Bee", 2, 0)]);
    let history = load_history(history_dir.path()).unwrap();

    for (field, svg) in render_charts(&history, &ChartConfig::new()).unwrap() {
        assert!(svg.contains("Bee"), "{} chart should be labelled with final names", field);
    }
}

#[test]
fn test_execute_graphs_extreme_scores() {
    let history_dir = tempfile::tempdir().unwrap();
    write_snapshot(
        history_dir.path(),
        1,
        &[("p1", "Low", i64::MIN, 0), ("p2", "High", i64::MAX, 0)],
    );
    let out_dir = tempfile::tempdir().unwrap();

    execute_graphs(GraphArgs {
        history_dir: history_dir.path().to_path_buf(),
        output_dir: out_dir.path().to_path_buf(),
        ..Default::default()
    })
    .unwrap();

    let png = fs::read(out_dir.path().join("score.png")).unwrap();
    assert!(png.starts_with(PNG_SIGNATURE));
}

#[test]
fn test_execute_graphs_inconsistent_history_writes_nothing() {
    let history_dir = tempfile::tempdir().unwrap();
    write_snapshot(history_dir.path(), 1, &[("p1", "A", 0, 0)]);
    write_snapshot(history_dir.path(), 2, &[("p2", "B", 0, 0)]);
    let out_dir = tempfile::tempdir().unwrap();
    let graphs = out_dir.path().join("graphs");

    let result = execute_graphs(GraphArgs {
        history_dir: history_dir.path().to_path_buf(),
        output_dir: graphs.clone(),
        ..Default::default()
    });

    assert!(result.is_err());
    assert!(!graphs.exists());
}

#[test]
fn test_render_charts_returns_all_fields() {
    let history_dir = tempfile::tempdir().unwrap();
    write_snapshot(history_dir.path(), 10, &[("p1", "A", 1, 0)]);
    let history = load_history(history_dir.path()).unwrap();

    let charts = render_charts(&history, &ChartConfig::new()).unwrap();

    let names: Vec<String> = charts.iter().map(|(f, _)| f.to_string()).collect();
    assert_eq!(names, vec!["score", "kills", "wins", "chests", "segfaults"]);
}

#[test]
fn test_build_name_report() {
    let history_dir = tempfile::tempdir().unwrap();
    write_snapshot(history_dir.path(), 1, &[("p1", "A", 0, 0)]);
    write_snapshot(history_dir.path(), 2, &[("p1", "A", 0, 0)]);
    write_snapshot(history_dir.path(), 3, &[("p1", "B", 0, 0)]);

    let history = load_history(history_dir.path()).unwrap();

    assert_eq!(build_name_report(&history).unwrap(), "A -> B");
}

#[test]
fn test_build_leaderboard_report_from_file() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), 1, &[("x", "x", 5, 0), ("y", "y", 0, 0), ("z", "z", 10, 2)]);

    let roster = read_roster(dir.path().join("save_1.json")).unwrap();
    let report = build_leaderboard_report(&roster);

    assert!(report.starts_with("\nscore:\n\tz - 10 score\n\tx - 5 score\n\nkills:\n\tz - 2 kills"));
    assert!(!report.contains("y - 0"));
}

#[test]
fn test_execute_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let save = dir.path().join("save.json");

    execute_init(InitArgs { output: save.clone() }).unwrap();

    assert!(validate_save_file(&save).is_ok());
}

#[test]
fn test_validate_rejects_malformed_save() {
    let dir = tempfile::tempdir().unwrap();
    let save = dir.path().join("save.json");
    fs::write(&save, r#"{"players": {"a": {"name": "A"}}}"#).unwrap();

    let err = validate_save_file(&save).unwrap_err();
    let message = format!("{:#}", err);

    assert!(message.contains("missing field `score`"));
    assert!(!message.contains("Failed to serialize"));
}
