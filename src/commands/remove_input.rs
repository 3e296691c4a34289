//! `fbctl remove-input` — remove log inputs matching the given paths.
//!
//! Matching is by intersection: an input is removed when ANY of its paths is
//! listed, even if it tails other files too. Removing the last input fails
//! validation and leaves the file untouched.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::input_service;

/// Arguments for the remove-input command.
#[derive(Args)]
pub struct RemoveInputArgs {
    /// Paths identifying the inputs to remove. An input with several paths is
    /// removed entirely when any one of them matches.
    #[arg(long, required = true, value_delimiter = ',')]
    pub paths: Vec<String>,
}

/// Run the remove-input command.
pub fn run(app: &AppContext, args: &RemoveInputArgs) -> Result<()> {
    let removed = input_service::remove_inputs(&app.store, &args.paths)?;

    if removed.is_empty() {
        app.output.warn("No inputs matched the given paths");
        return Ok(());
    }
    app.output.success("Inputs removed");
    for input in &removed {
        app.output
            .kv(&input.fields.projectname, &input.paths.join(", "));
    }
    Ok(())
}
