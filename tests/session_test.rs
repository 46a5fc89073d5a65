//! Full session tests: setup prompts, matches and the leaderboard.

use std::path::Path;
use tictactoe::{GameConfig, render_leaderboard, run_match};
use tictactoe_core::{GameStatus, ScriptedConsole, StatsFile};

fn play_pattern(name_x: &str, name_o: &str, stats: &Path, moves: &[&str]) -> GameStatus {
    let mut lines = vec![name_x.to_string(), name_o.to_string()];
    lines.push(stats.display().to_string());
    lines.extend(moves.iter().map(|m| m.to_string()));

    let mut console = ScriptedConsole::new(lines);
    run_match(&mut console, &GameConfig::default())
        .unwrap()
        .status()
        .clone()
}

#[test]
fn test_sessions_accumulate_tallies() {
    let dir = tempfile::tempdir().unwrap();
    let stats = dir.path().join("league_stats.json");

    let x_wins = [&["1", "2", "4", "5", "7"][..], &["5", "2", "1", "3", "9"][..]];
    let o_wins = [&["1", "3", "2", "6", "4", "9"][..]];

    for moves in x_wins {
        assert!(matches!(
            play_pattern("Ann", "Ben", &stats, moves),
            GameStatus::Won { .. }
        ));
    }
    for moves in o_wins {
        assert!(matches!(
            play_pattern("Ann", "Ben", &stats, moves),
            GameStatus::Won { .. }
        ));
    }

    let tallies = StatsFile::new(&stats).load().unwrap();
    assert_eq!(tallies["Ann"], 2);
    assert_eq!(tallies["Ben"], 1);
    assert_eq!(
        render_leaderboard(&StatsFile::new(&stats)).unwrap(),
        "Ann: 2\nBen: 1"
    );
}

#[test]
fn test_empty_names_are_reprompted_and_result_is_shown() {
    let dir = tempfile::tempdir().unwrap();
    let stats = dir.path().join("stats.json");
    let config = GameConfig::default().with_overrides(Some(stats.clone()), None, None);

    let mut console = ScriptedConsole::new(["", "Ann", "", "Ben", "q"]);
    let termination = run_match(&mut console, &config).unwrap();

    assert_eq!(termination.status(), &GameStatus::Quit);
    let shown = console.shown();
    assert_eq!(
        shown.iter().filter(|s| *s == "Name cannot be empty.").count(),
        2
    );
    assert_eq!(
        shown.last().map(String::as_str),
        Some("The game has ended. Player quit.")
    );
    assert!(!stats.exists());
}

#[test]
fn test_configured_names_skip_prompts() {
    let dir = tempfile::tempdir().unwrap();
    let stats = dir.path().join("stats.json");
    let config = GameConfig::default().with_overrides(
        Some(stats.clone()),
        Some("Ann".to_string()),
        Some("Ben".to_string()),
    );

    let mut console = ScriptedConsole::new(["1", "4", "2", "5", "3"]);
    let termination = run_match(&mut console, &config).unwrap();

    assert_eq!(termination.message(), "Player Ann wins!");
    assert!(console.prompts().iter().all(|p| p.starts_with("Player ")));
    assert_eq!(StatsFile::new(&stats).load().unwrap()["Ann"], 1);
}

#[test]
fn test_empty_leaderboard() {
    let dir = tempfile::tempdir().unwrap();
    let stats = StatsFile::new(dir.path().join("none.json"));
    assert_eq!(render_leaderboard(&stats).unwrap(), "No wins recorded yet.");
}
