//! `fbctl install` — install the Filebeat package, write the default
//! configuration, and optionally start the service.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ConfigStore as _;
use crate::application::services::{input_service, install_service};
use crate::infra::assets::{self, PackageDirSource};

/// Arguments for the install command.
#[derive(Args)]
pub struct InstallArgs {
    /// Whether to start Filebeat after installation
    #[arg(short, long, default_value_t = true)]
    pub start: bool,
}

/// Run the install command.
pub async fn run(app: &AppContext, args: &InstallArgs) -> Result<()> {
    let format = assets::detect_package_format()?;
    let source = PackageDirSource::from_env();

    install_service::install(&app.runner, &source, format).await?;
    app.output
        .success(&format!("Filebeat installed ({})", format.tool()));

    input_service::init(&app.store)?;
    app.output.success("Configuration initialized");
    app.output
        .kv("config", &app.store.path().display().to_string());

    if args.start {
        install_service::restart_service(&app.runner).await?;
        app.output.success("Filebeat started");
    }
    Ok(())
}
