//! Integration test: invoke the `frcities` binary and check the usage and
//! argument contract (stdout, exit status, no files created).

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Run `frcities` with config, state and working dir all under `root`.
fn frcities(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_frcities"))
        .args(args)
        .current_dir(root)
        .env("HOME", root)
        .env("XDG_CONFIG_HOME", root.join("config"))
        .env("XDG_STATE_HOME", root.join("state"))
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn frcities")
}

#[test]
fn missing_resource_id_prints_usage_and_exits_1() {
    let root = tempdir().unwrap();
    let out = frcities(root.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Usage:"), "stdout was {stdout:?}");
    assert!(stdout.contains("frcities"));
}

#[test]
fn missing_resource_id_touches_no_files() {
    let root = tempdir().unwrap();
    let out = frcities(root.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(!root.path().join("state").exists(), "no log file");
    assert!(!root.path().join("config").exists(), "no config file");
    assert!(!root.path().join("src").exists(), "no output file");
}

#[test]
fn empty_resource_id_is_invalid_argument() {
    let root = tempdir().unwrap();
    let out = frcities(root.path(), &[""]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stdout.starts_with("Usage:"), "stdout was {stdout:?}");
    assert!(stderr.contains("invalid argument"), "stderr was {stderr:?}");
    assert!(!root.path().join("src/main/resources/fr_cities.txt").exists());
}
