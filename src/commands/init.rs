//! `fbctl init` — write the default configuration document.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::ConfigStore as _;
use crate::application::services::input_service;

/// Run the init command.
pub fn run(app: &AppContext) -> Result<()> {
    input_service::init(&app.store)?;
    app.output.success("Configuration initialized");
    app.output
        .kv("config", &app.store.path().display().to_string());
    Ok(())
}
