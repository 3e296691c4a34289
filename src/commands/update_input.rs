//! `fbctl update-input` — replace the path lists of matching log inputs.
//!
//! Every input whose path set intersects the old paths gets its ENTIRE path
//! list replaced with the new paths; non-matching paths on a matched input
//! are dropped, not kept.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::input_service;

/// Arguments for the update-input command.
#[derive(Args)]
pub struct UpdateInputArgs {
    /// Paths identifying the inputs to rewrite
    #[arg(long, required = true, value_delimiter = ',')]
    pub old_paths: Vec<String>,

    /// Replacement path list, applied in full to every matched input
    #[arg(long, required = true, value_delimiter = ',')]
    pub new_paths: Vec<String>,
}

/// Run the update-input command.
pub fn run(app: &AppContext, args: &UpdateInputArgs) -> Result<()> {
    let updated = input_service::update_inputs(&app.store, &args.old_paths, &args.new_paths)?;

    if updated.is_empty() {
        app.output.warn("No inputs matched the given paths");
        return Ok(());
    }
    app.output.success("Inputs updated");
    app.output.kv("projects", &updated.join(", "));
    app.output.kv("new paths", &args.new_paths.join(", "));
    Ok(())
}
