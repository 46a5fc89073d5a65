//! Tests for the persisted win tallies.

use tictactoe_core::{StatsFile, record_win};

#[test]
fn test_n_wins_add_n_to_prior_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    std::fs::write(&path, r#"{"Alice": 7}"#).unwrap();

    for _ in 0..4 {
        record_win(&path, "Alice").unwrap();
        record_win(&path, "Bob").unwrap();
    }

    let tallies = StatsFile::new(&path).load().unwrap();
    assert_eq!(tallies["Alice"], 11);
    assert_eq!(tallies["Bob"], 4);
}

#[test]
fn test_store_is_flat_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    record_win(&path, "Zoë").unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "Zoë": 1 }));
}
