//! Application context — unified state passed to every command handler.
//!
//! Constructed once in `Cli::run()` from the global flags. Adding a new
//! cross-cutting concern requires only one field change here — zero command
//! signatures change.

use std::path::PathBuf;

use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::output::OutputContext;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Store for the managed configuration file.
    pub store: YamlConfigStore,
    /// Runner for package-manager and systemctl invocations.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(config_path: PathBuf, no_color: bool, quiet: bool) -> Self {
        Self {
            output: OutputContext::new(no_color, quiet),
            store: YamlConfigStore::new(config_path),
            runner: TokioCommandRunner::default(),
        }
    }
}
