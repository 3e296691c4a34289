//! Integration tests for `fbctl add-input`, `remove-input`, and
//! `update-input` — the whole load → transform → validate → persist cycle
//! against a real file.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use fbctl::domain::config::FilebeatConfig;

fn fbctl() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fbctl"))
}

/// Init a config in a temp dir and return (dir-guard, path).
fn initialized_config() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("filebeat.yml")
        .to_string_lossy()
        .into_owned();
    fbctl().args(["--config", &path, "init"]).assert().success();
    (dir, path)
}

fn read_config(path: &str) -> FilebeatConfig {
    let content = std::fs::read_to_string(path).expect("config file");
    serde_yaml::from_str(&content).expect("valid yaml")
}

// ── add-input ─────────────────────────────────────────────────────────────────

#[test]
fn test_add_input_appends_new_entry() {
    let (_dir, path) = initialized_config();
    fbctl()
        .args([
            "--config",
            &path,
            "add-input",
            "--paths",
            "/var/log/nginx/access.log",
            "--project",
            "web",
            "--type",
            "nginx",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("New input added"));

    let cfg = read_config(&path);
    assert_eq!(cfg.filebeat.inputs.len(), 3);
    let last = cfg.filebeat.inputs.last().expect("appended");
    assert_eq!(last.fields.projectname, "web");
    assert_eq!(last.fields.filetype, "nginx");
    assert_eq!(last.paths, vec!["/var/log/nginx/access.log"]);
}

#[test]
fn test_add_input_comma_separated_paths() {
    let (_dir, path) = initialized_config();
    fbctl()
        .args([
            "--config",
            &path,
            "add-input",
            "--paths",
            "/var/log/a.log,/var/log/b.log",
            "--project",
            "multi",
            "--type",
            "app",
        ])
        .assert()
        .success();

    let cfg = read_config(&path);
    let last = cfg.filebeat.inputs.last().expect("appended");
    assert_eq!(last.paths, vec!["/var/log/a.log", "/var/log/b.log"]);
}

#[test]
fn test_add_input_duplicate_paths_allowed() {
    let (_dir, path) = initialized_config();
    for project in ["first", "second"] {
        fbctl()
            .args([
                "--config",
                &path,
                "add-input",
                "--paths",
                "/var/log/same.log",
                "--project",
                project,
                "--type",
                "app",
            ])
            .assert()
            .success();
    }
    assert_eq!(read_config(&path).filebeat.inputs.len(), 4);
}

#[test]
fn test_add_input_missing_config_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("missing.yml")
        .to_string_lossy()
        .into_owned();
    fbctl()
        .args([
            "--config",
            &path,
            "add-input",
            "--paths",
            "/var/log/x.log",
            "--project",
            "p",
            "--type",
            "t",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_add_input_malformed_yaml_fails_with_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("filebeat.yml")
        .to_string_lossy()
        .into_owned();
    std::fs::write(&path, "filebeat:\n  inputs: not-a-list\n").expect("write");

    fbctl()
        .args([
            "--config",
            &path,
            "add-input",
            "--paths",
            "/var/log/x.log",
            "--project",
            "p",
            "--type",
            "t",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse"));
}

// ── remove-input ──────────────────────────────────────────────────────────────

#[test]
fn test_remove_input_drops_matching_entry() {
    let (_dir, path) = initialized_config();
    fbctl()
        .args([
            "--config",
            &path,
            "remove-input",
            "--paths",
            "/var/log/audit/audit.log",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inputs removed"));

    let cfg = read_config(&path);
    assert_eq!(cfg.filebeat.inputs.len(), 1);
    assert_eq!(cfg.filebeat.inputs[0].fields.filetype, "secure");
}

#[test]
fn test_remove_input_partial_match_removes_whole_input() {
    let (_dir, path) = initialized_config();
    fbctl()
        .args([
            "--config",
            &path,
            "add-input",
            "--paths",
            "/var/log/a.log,/var/log/b.log",
            "--project",
            "multi",
            "--type",
            "app",
        ])
        .assert()
        .success();

    // Naming only b.log removes the whole multi-path input.
    fbctl()
        .args(["--config", &path, "remove-input", "--paths", "/var/log/b.log"])
        .assert()
        .success();

    let cfg = read_config(&path);
    assert_eq!(cfg.filebeat.inputs.len(), 2);
    assert!(
        cfg.filebeat
            .inputs
            .iter()
            .all(|i| i.fields.projectname != "multi")
    );
}

#[test]
fn test_remove_last_input_fails_and_leaves_file_untouched() {
    let (_dir, path) = initialized_config();
    let before = std::fs::read_to_string(&path).expect("config file");

    fbctl()
        .args([
            "--config",
            &path,
            "remove-input",
            "--paths",
            "/var/log/secure,/var/log/audit/audit.log",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no inputs configured"));

    let after = std::fs::read_to_string(&path).expect("config file");
    assert_eq!(before, after, "file must not change on a failed operation");
}

#[test]
fn test_remove_input_no_match_warns_and_succeeds() {
    let (_dir, path) = initialized_config();
    fbctl()
        .args(["--config", &path, "remove-input", "--paths", "/var/log/nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No inputs matched"));
    assert_eq!(read_config(&path).filebeat.inputs.len(), 2);
}

// ── update-input ──────────────────────────────────────────────────────────────

#[test]
fn test_update_input_replaces_paths() {
    let (_dir, path) = initialized_config();
    fbctl()
        .args([
            "--config",
            &path,
            "update-input",
            "--old-paths",
            "/var/log/secure",
            "--new-paths",
            "/var/log/secure2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inputs updated"));

    let cfg = read_config(&path);
    assert_eq!(cfg.filebeat.inputs[0].paths, vec!["/var/log/secure2"]);
    assert_eq!(cfg.filebeat.inputs[1].paths, vec!["/var/log/audit/audit.log"]);
}

#[test]
fn test_update_input_full_replacement_drops_other_paths() {
    let (_dir, path) = initialized_config();
    fbctl()
        .args([
            "--config",
            &path,
            "add-input",
            "--paths",
            "/var/log/a.log,/var/log/b.log",
            "--project",
            "multi",
            "--type",
            "app",
        ])
        .assert()
        .success();

    fbctl()
        .args([
            "--config",
            &path,
            "update-input",
            "--old-paths",
            "/var/log/a.log",
            "--new-paths",
            "/var/log/new.log",
        ])
        .assert()
        .success();

    let cfg = read_config(&path);
    let multi = cfg.filebeat.inputs.last().expect("multi input");
    assert_eq!(multi.paths, vec!["/var/log/new.log"]);
}

#[test]
fn test_update_input_no_match_warns_and_changes_nothing() {
    let (_dir, path) = initialized_config();
    let before = std::fs::read_to_string(&path).expect("config file");

    fbctl()
        .args([
            "--config",
            &path,
            "update-input",
            "--old-paths",
            "/var/log/nope",
            "--new-paths",
            "/var/log/new.log",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No inputs matched"));

    // No matches still re-persists an identical document.
    let after = std::fs::read_to_string(&path).expect("config file");
    assert_eq!(before, after);
}
