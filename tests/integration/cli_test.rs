//! Integration tests for the storyline CLI

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{quiet_config, storyline, write_file, SMALL_DECK};

/// Run storyline with a quiet config and format the result for a snapshot.
fn snapshot_run(args: &[&str]) -> String {
    let temp = TempDir::new().unwrap();
    let output = storyline(&quiet_config(temp.path()))
        .args(args)
        .output()
        .expect("Failed to execute storyline");
    format!(
        "=== storyline {} ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        args.join(" "),
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    storyline(&quiet_config(temp.path()))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("scenes"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn snapshot_cli_help_check() {
    let output = snapshot_run(&["check", "--help"]);
    insta::assert_snapshot!("cli_help_check", output);
}

#[test]
fn version_includes_package_version() {
    let temp = TempDir::new().unwrap();
    storyline(&quiet_config(temp.path()))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_accepts_valid_deck() {
    let temp = TempDir::new().unwrap();
    let deck = write_file(temp.path(), "tide.toml", SMALL_DECK);
    storyline(&quiet_config(temp.path()))
        .arg("check")
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Tide Pools\", 3 scenes"));
}

#[test]
fn check_rejects_invalid_deck() {
    let temp = TempDir::new().unwrap();
    let deck = write_file(temp.path(), "bad.toml", "[[scenes]]\ntitle = \"Only title\"\n");
    storyline(&quiet_config(temp.path()))
        .arg("check")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid deck"))
        .stderr(predicate::str::contains("description"));
}

#[test]
fn check_without_deck_is_usage_error() {
    let temp = TempDir::new().unwrap();
    storyline(&quiet_config(temp.path()))
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<DECK>"));
}

// ============================================================================
// scenes
// ============================================================================

#[test]
fn scenes_lists_builtin_deck_by_default() {
    let temp = TempDir::new().unwrap();
    storyline(&quiet_config(temp.path()))
        .arg("scenes")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Dolphin Mystery"))
        .stdout(predicate::str::contains("A Mysterious Discovery"))
        .stdout(predicate::str::contains("(start over)"));
}

#[test]
fn snapshot_scenes_builtin_table() {
    let output = snapshot_run(&["scenes"]);
    insta::assert_snapshot!("scenes_builtin_table", output);
}

#[test]
fn scenes_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let deck = write_file(temp.path(), "tide.toml", SMALL_DECK);
    let output = storyline(&quiet_config(temp.path()))
        .args(["scenes", "--json"])
        .arg(&deck)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Tide Pools");
    assert_eq!(json["scenes"].as_array().unwrap().len(), 3);
    assert_eq!(json["scenes"][1]["has_factoid"], true);
}

#[test]
fn scenes_uses_deck_from_config() {
    let temp = TempDir::new().unwrap();
    let deck = write_file(temp.path(), "tide.toml", SMALL_DECK);
    let config = write_file(
        temp.path(),
        "config.toml",
        &format!(
            "[logging]\nenabled = false\n\n[deck]\npath = {:?}\n",
            deck.display().to_string()
        ),
    );
    storyline(&config)
        .arg("scenes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anemones"));
}

// ============================================================================
// play
// ============================================================================

#[test]
fn play_refuses_without_terminal() {
    let temp = TempDir::new().unwrap();
    storyline(&quiet_config(temp.path()))
        .arg("play")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_prints_flag_value() {
    let temp = TempDir::new().unwrap();
    let config = quiet_config(temp.path());
    storyline(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_reflects_file() {
    let temp = TempDir::new().unwrap();
    storyline(&quiet_config(temp.path()))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = \"mono\""))
        .stdout(predicate::str::contains("enabled = false"));
}

#[test]
fn config_init_creates_and_protects_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fresh.toml");

    storyline(&path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    storyline(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = write_file(temp.path(), "config.toml", "[display\n");
    storyline(&config)
        .arg("scenes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    storyline(&quiet_config(temp.path()))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storyline"));
}
