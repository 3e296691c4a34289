//! Pure mutation transforms over a loaded configuration document.
//!
//! Each function rewrites the input list in place and returns what changed so
//! the command layer can report it. Validation and persistence are composed
//! by the application service, never here.
//!
//! Path matching caveat: remove and update treat a single matching path as a
//! match for the whole input. An input tailing five files is removed (or has
//! its entire path list replaced) when just one of its paths is named. Users
//! with multi-path inputs should list paths per input they intend to touch.

use crate::domain::config::{FilebeatConfig, InputConfig};

/// Append a new enabled log input. Duplicates against existing entries are
/// allowed — the list is ordered and never deduplicated.
pub fn add_input(cfg: &mut FilebeatConfig, project: &str, filetype: &str, paths: Vec<String>) {
    cfg.filebeat
        .inputs
        .push(InputConfig::log_input(project, filetype, paths));
}

/// Remove every input whose path set intersects `targets`, returning the
/// removed entries in their original order.
pub fn remove_inputs(cfg: &mut FilebeatConfig, targets: &[String]) -> Vec<InputConfig> {
    let mut removed = Vec::new();
    cfg.filebeat.inputs.retain(|input| {
        let hit = targets.iter().any(|t| input.paths.contains(t));
        if hit {
            removed.push(input.clone());
        }
        !hit
    });
    removed
}

/// Replace the entire path list of every input whose path set intersects
/// `old_paths`. Returns the project names of the inputs that were rewritten.
///
/// The replacement is a full overwrite, not a splice: non-matching paths on a
/// matching input are dropped along with the matching ones.
pub fn update_inputs(
    cfg: &mut FilebeatConfig,
    old_paths: &[String],
    new_paths: &[String],
) -> Vec<String> {
    let mut updated = Vec::new();
    for input in &mut cfg.filebeat.inputs {
        // First intersecting old path decides; the rewrite is the same either way.
        if old_paths.iter().any(|p| input.paths.contains(p)) {
            input.paths = new_paths.to_vec();
            updated.push(input.fields.projectname.clone());
        }
    }
    updated
}

// ── Unit tests ───────────────────────────────────────────────────────────────
