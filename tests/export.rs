mod common;

use badminton_stats::export::export_json;
use common::seeded_analyzer;

#[test]
fn test_exported_report_is_pretty_json() {
    let analyzer = seeded_analyzer();
    let report = analyzer.scouting_report(1).unwrap().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("report.json");

    export_json(&report, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\n  \"player_info\""));
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["player_info"]["name"], "Viktor Axelsen");
    assert_eq!(value["playing_style"]["rally_preference"]["preferred_rally_length"], "short");
}

#[test]
fn test_unbounded_ratio_exports_as_infinity() {
    let analyzer = seeded_analyzer();
    let mut shots = analyzer.shot_distribution(1).unwrap();
    shots.winner_to_error_ratio = f64::INFINITY;

    let value = serde_json::to_value(&shots).unwrap();

    assert_eq!(value["winner_to_error_ratio"], "Infinity");
}
