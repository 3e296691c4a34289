//! `fbctl start-filebeat` — restart the service via systemctl.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::install_service;

/// Run the start-filebeat command.
pub async fn run(app: &AppContext) -> Result<()> {
    install_service::restart_service(&app.runner).await?;
    app.output.success("Filebeat started");
    Ok(())
}
