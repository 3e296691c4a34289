//! `fbctl add-input` — append a new log input to the configuration.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::input_service;

/// Arguments for the add-input command.
#[derive(Args)]
pub struct AddInputArgs {
    /// Log file paths for the new input
    #[arg(long, required = true, value_delimiter = ',')]
    pub paths: Vec<String>,

    /// Project name tag attached to records from this input
    #[arg(long)]
    pub project: String,

    /// File type tag attached to records from this input
    #[arg(long = "type")]
    pub filetype: String,
}

/// Run the add-input command.
pub fn run(app: &AppContext, args: &AddInputArgs) -> Result<()> {
    input_service::add_input(&app.store, &args.project, &args.filetype, args.paths.clone())?;

    app.output.success("New input added");
    app.output.kv("project", &args.project);
    app.output.kv("type", &args.filetype);
    app.output.kv("paths", &args.paths.join(", "));
    Ok(())
}
