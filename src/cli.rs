//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;
use crate::domain::config::DEFAULT_CONFIG_PATH;

/// Filebeat configuration management tool
#[derive(Parser)]
#[command(
    name = "fbctl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the managed Filebeat configuration file
    #[arg(
        long,
        global = true,
        env = "FBCTL_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the default configuration
    #[command(alias = "i")]
    Init,

    /// Add a new log input
    AddInput(commands::add_input::AddInputArgs),

    /// Remove log inputs by path
    RemoveInput(commands::remove_input::RemoveInputArgs),

    /// Replace the paths of matching log inputs
    UpdateInput(commands::update_input::UpdateInputArgs),

    /// Install Filebeat, initialize config, and start it
    Install(commands::install::InstallArgs),

    /// Start Filebeat with systemctl
    StartFilebeat,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails; the caller prints the cause and
    /// exits non-zero.
    pub async fn run(self) -> Result<()> {
        let Cli {
            config,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(config, no_color, quiet);
        match command {
            Command::Init => commands::init::run(&app),
            Command::AddInput(args) => commands::add_input::run(&app, &args),
            Command::RemoveInput(args) => commands::remove_input::run(&app, &args),
            Command::UpdateInput(args) => commands::update_input::run(&app, &args),
            Command::Install(args) => commands::install::run(&app, &args).await,
            Command::StartFilebeat => commands::start::run(&app).await,
        }
    }
}
