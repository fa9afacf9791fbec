//! Runs the built binary: stdout, stderr and exit status as a user sees them

use std::process::{Command, Output};

use tempfile::TempDir;

use treewalk::exitcode;

const EXPECTED: &str = "\
beginning depth first search
visiting node 'root'
visiting node 'a'
visiting node 'c'
visiting node 'd'
visiting node 'e'
visiting node 'b'
visiting node 'f'
finished depth first search
";

/// Runs treewalk with an isolated XDG config dir and no `TREEWALK_*` variables.
fn treewalk(config_home: &TempDir, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treewalk"));
    cmd.args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    for (key, _) in std::env::vars().filter(|(k, _)| k.starts_with("TREEWALK_")) {
        cmd.env_remove(key);
    }
    cmd.output().expect("run treewalk")
}

#[test]
fn given_no_arguments_when_running_then_prints_search_and_nothing_on_stderr() {
    let config_home = TempDir::new().unwrap();

    let output = treewalk(&config_home, &[]);

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn given_single_debug_flag_when_running_then_only_info_is_logged() {
    let config_home = TempDir::new().unwrap();

    let output = treewalk(&config_home, &["-d"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(stderr.contains("Debug mode: info"), "stderr: {stderr}");
    assert!(!stderr.contains("tree ready"), "debug event leaked: {stderr}");
}

#[test]
fn given_iterative_strategy_flag_when_running_then_output_is_unchanged() {
    let config_home = TempDir::new().unwrap();

    let output = treewalk(&config_home, &["--strategy", "iterative"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

// XDG_CONFIG_HOME only steers the config path on Linux
#[cfg(target_os = "linux")]
#[test]
fn given_malformed_config_file_when_running_then_exits_with_config_error() {
    let config_home = TempDir::new().unwrap();
    let config_dir = config_home.path().join("treewalk");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("treewalk.toml"), "strategy = [").unwrap();

    let output = treewalk(&config_home, &[]);

    assert_eq!(output.status.code(), Some(exitcode::CONFIG));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config error"));
}
