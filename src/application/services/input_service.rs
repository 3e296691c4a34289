//! Application service — configuration document use-cases.
//!
//! Every operation is one linear load → transform → validate → persist pass.
//! A load or validation failure returns before `save`, so the prior on-disk
//! document is never replaced by a partially-applied or invalid state.
//!
//! There is no lock on the file: two concurrent invocations race on
//! load/modify/store and the later writer wins.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::{FilebeatConfig, InputConfig};
use crate::domain::{mutate, validate};

/// Write the hard-coded default document, replacing whatever is on disk.
pub fn init(store: &impl ConfigStore) -> Result<()> {
    let cfg = FilebeatConfig::default_template();
    validate::validate(&cfg).context("invalid config")?;
    store.save(&cfg)
}

/// Append a new enabled log input and persist.
///
/// # Errors
///
/// Fails if the file cannot be loaded, or if the resulting document is
/// invalid (e.g. `paths` is empty). Nothing is written on failure.
pub fn add_input(
    store: &impl ConfigStore,
    project: &str,
    filetype: &str,
    paths: Vec<String>,
) -> Result<()> {
    let mut cfg = store.load()?;
    mutate::add_input(&mut cfg, project, filetype, paths);
    validate::validate(&cfg).context("invalid config")?;
    store.save(&cfg)
}

/// Remove every input whose path set intersects `targets` and persist.
/// Returns the removed inputs for reporting.
///
/// # Errors
///
/// Fails if removing the matches would leave the document invalid — in
/// particular "no inputs configured" when the last input is removed. The
/// on-disk file is left untouched in that case.
pub fn remove_inputs(store: &impl ConfigStore, targets: &[String]) -> Result<Vec<InputConfig>> {
    let mut cfg = store.load()?;
    let removed = mutate::remove_inputs(&mut cfg, targets);
    validate::validate(&cfg).context("invalid config")?;
    store.save(&cfg)?;
    Ok(removed)
}

/// Replace the path list of every input intersecting `old_paths` and persist.
/// Returns the project names of the rewritten inputs.
pub fn update_inputs(
    store: &impl ConfigStore,
    old_paths: &[String],
    new_paths: &[String],
) -> Result<Vec<String>> {
    let mut cfg = store.load()?;
    let updated = mutate::update_inputs(&mut cfg, old_paths, new_paths);
    validate::validate(&cfg).context("invalid config")?;
    store.save(&cfg)?;
    Ok(updated)
}
