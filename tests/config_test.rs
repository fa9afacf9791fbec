//! Integration tests for Settings layered loading.
//!
//! Environment overrides are passed as explicit maps so the tests never read
//! or mutate the process environment.

use std::fs;

use config::Map;
use tempfile::TempDir;

use treewalk::config::Settings;
use treewalk::domain::Strategy;

fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn given_missing_config_file_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treewalk.toml");

    let settings = Settings::load_with(Some(&path), env(&[])).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_when_load_then_file_values_apply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treewalk.toml");
    fs::write(&path, "strategy = \"iterative\"\nshow_tree = true\n").unwrap();

    let settings = Settings::load_with(Some(&path), env(&[])).expect("load settings");

    assert_eq!(settings.strategy, Strategy::Iterative);
    assert!(settings.show_tree);
}

#[test]
fn given_config_file_and_env_when_load_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treewalk.toml");
    fs::write(&path, "strategy = \"iterative\"\n").unwrap();

    let settings = Settings::load_with(
        Some(&path),
        env(&[("TREEWALK_STRATEGY", "recursive"), ("TREEWALK_SHOW_TREE", "true")]),
    )
    .expect("load settings");

    assert_eq!(settings.strategy, Strategy::Recursive);
    assert!(settings.show_tree);
}

#[test]
fn given_unknown_strategy_when_load_then_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treewalk.toml");
    fs::write(&path, "strategy = \"breadth\"\n").unwrap();

    let result = Settings::load_with(Some(&path), env(&[]));

    assert!(result.is_err(), "unexpected settings: {:?}", result.ok());
}

#[test]
fn given_malformed_toml_when_load_then_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treewalk.toml");
    fs::write(&path, "strategy = [").unwrap();

    assert!(Settings::load_with(Some(&path), env(&[])).is_err());
}
