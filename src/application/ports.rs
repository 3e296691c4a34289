//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::config::FilebeatConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Native packaging format of the host, decided by probing for the package
/// manager executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    Rpm,
    Deb,
}

impl PackageFormat {
    /// The package-manager executable that installs this format.
    #[must_use]
    pub fn tool(self) -> &'static str {
        match self {
            Self::Rpm => "rpm",
            Self::Deb => "dpkg",
        }
    }

    /// File extension for a staged installer payload, dot included.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Rpm => ".rpm",
            Self::Deb => ".deb",
        }
    }
}

// ── Configuration Store Port ──────────────────────────────────────────────────

/// Abstracts load/store of the whole configuration document against a file
/// path. Writes always replace the entire document; there are no field-level
/// updates.
pub trait ConfigStore {
    /// Load and decode the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    fn load(&self) -> Result<FilebeatConfig>;

    /// Encode and persist the document, creating parent directories first.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save(&self, config: &FilebeatConfig) -> Result<()>;

    /// The file path this store reads and writes.
    fn path(&self) -> &Path;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Installer Source Port ─────────────────────────────────────────────────────

/// Abstracts where installer payloads come from. The install service only
/// needs bytes for a format; packaging decides how they are shipped.
pub trait InstallerSource {
    /// Obtain the raw installer package for the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if no payload is available for `format`.
    fn installer_bytes(&self, format: PackageFormat) -> Result<Vec<u8>>;
}
