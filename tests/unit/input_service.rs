//! Unit tests for the input service — load → transform → validate → persist
//! orchestration against an in-memory store.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use fbctl::application::services::input_service;
use fbctl::domain::config::FilebeatConfig;

use crate::mocks::MemoryConfigStore;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn test_init_persists_default_template() {
    let store = MemoryConfigStore::empty();
    input_service::init(&store).expect("init");

    let saved = store.current().expect("document persisted");
    assert_eq!(saved, FilebeatConfig::default_template());
}

#[test]
fn test_init_overwrites_existing_document() {
    let mut existing = FilebeatConfig::default_template();
    existing.filebeat.inputs.truncate(1);
    let store = MemoryConfigStore::with(existing);

    input_service::init(&store).expect("init");

    let saved = store.current().expect("document persisted");
    assert_eq!(saved.filebeat.inputs.len(), 2);
}

// ── add_input ─────────────────────────────────────────────────────────────────

#[test]
fn test_add_input_persists_appended_input() {
    let store = MemoryConfigStore::with(FilebeatConfig::default_template());

    input_service::add_input(&store, "proj", "secure", strings(&["/var/log/secure"]))
        .expect("add");

    let saved = store.current().expect("document persisted");
    assert_eq!(saved.filebeat.inputs.len(), 3);
    assert_eq!(saved.filebeat.inputs[2].fields.projectname, "proj");
}

#[test]
fn test_add_input_with_empty_paths_fails_and_does_not_persist() {
    let store = MemoryConfigStore::with(FilebeatConfig::default_template());
    let before = store.current();

    let err = input_service::add_input(&store, "proj", "app", vec![]).expect_err("must fail");
    assert!(
        format!("{err:#}").contains("no paths configured"),
        "got: {err:#}"
    );
    assert_eq!(store.current(), before, "store must be untouched");
}

#[test]
fn test_add_input_on_missing_file_fails() {
    let store = MemoryConfigStore::empty();
    let err = input_service::add_input(&store, "p", "f", strings(&["/var/log/x"]))
        .expect_err("load must fail");
    assert!(format!("{err:#}").contains("cannot read"), "got: {err:#}");
    assert!(store.current().is_none());
}

// ── remove_inputs ─────────────────────────────────────────────────────────────

#[test]
fn test_remove_inputs_persists_and_reports_removed() {
    let store = MemoryConfigStore::with(FilebeatConfig::default_template());

    let removed = input_service::remove_inputs(&store, &strings(&["/var/log/audit/audit.log"]))
        .expect("remove");

    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].fields.filetype, "audit");
    let saved = store.current().expect("document persisted");
    assert_eq!(saved.filebeat.inputs.len(), 1);
    assert_eq!(saved.filebeat.inputs[0].fields.filetype, "secure");
}

#[test]
fn test_remove_last_input_fails_validation_and_does_not_persist() {
    let store = MemoryConfigStore::with(FilebeatConfig::default_template());
    let before = store.current();

    let err = input_service::remove_inputs(
        &store,
        &strings(&["/var/log/secure", "/var/log/audit/audit.log"]),
    )
    .expect_err("removing everything must fail");

    assert!(
        format!("{err:#}").contains("no inputs configured"),
        "got: {err:#}"
    );
    assert_eq!(store.current(), before, "store must be untouched");
}

// ── update_inputs ─────────────────────────────────────────────────────────────

#[test]
fn test_update_inputs_persists_replacement() {
    let store = MemoryConfigStore::with(FilebeatConfig::default_template());

    let updated = input_service::update_inputs(
        &store,
        &strings(&["/var/log/secure"]),
        &strings(&["/var/log/secure2"]),
    )
    .expect("update");

    assert_eq!(updated, vec!["centos-logs"]);
    let saved = store.current().expect("document persisted");
    assert_eq!(saved.filebeat.inputs[0].paths, vec!["/var/log/secure2"]);
}

#[test]
fn test_update_to_empty_paths_fails_and_does_not_persist() {
    let store = MemoryConfigStore::with(FilebeatConfig::default_template());
    let before = store.current();

    // Replacing with an empty list would leave an enabled input without paths.
    let err = input_service::update_inputs(&store, &strings(&["/var/log/secure"]), &[])
        .expect_err("must fail");

    assert!(
        format!("{err:#}").contains("no paths configured"),
        "got: {err:#}"
    );
    assert_eq!(store.current(), before, "store must be untouched");
}
