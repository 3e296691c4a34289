//! Installer payload resolution and host packaging-format detection.
//!
//! Payloads are named artifact files shipped next to the binary by the
//! packaging step, not embedded in the crate. The install service only sees
//! the `InstallerSource` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{InstallerSource, PackageFormat};
use crate::domain::error::InstallError;

/// Default directory the packaging step drops the installer payloads into.
pub const DEFAULT_PACKAGE_DIR: &str = "/usr/share/fbctl/packages";

/// Env var overriding the payload directory (used by tests and dev setups).
pub const PACKAGE_DIR_ENV: &str = "FBCTL_PKG_DIR";

/// Pick the packaging format for this host.
///
/// Linux only; a host with `rpm` on PATH gets the RPM payload, anything else
/// falls back to dpkg.
///
/// # Errors
///
/// Returns [`InstallError::UnsupportedOs`] on non-Linux hosts.
pub fn detect_package_format() -> Result<PackageFormat> {
    if !cfg!(target_os = "linux") {
        return Err(InstallError::UnsupportedOs(std::env::consts::OS.to_string()).into());
    }
    if tool_on_path("rpm") {
        Ok(PackageFormat::Rpm)
    } else {
        Ok(PackageFormat::Deb)
    }
}

fn tool_on_path(name: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| dir.join(name).is_file())
}

/// `InstallerSource` backed by a directory of payload files
/// (`filebeat.rpm`, `filebeat.deb`).
pub struct PackageDirSource {
    dir: PathBuf,
}

impl PackageDirSource {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Resolve the payload directory from `FBCTL_PKG_DIR`, falling back to
    /// the packaged default.
    #[must_use]
    pub fn from_env() -> Self {
        let dir = std::env::var_os(PACKAGE_DIR_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_PACKAGE_DIR), PathBuf::from);
        Self::new(dir)
    }
}

impl InstallerSource for PackageDirSource {
    fn installer_bytes(&self, format: PackageFormat) -> Result<Vec<u8>> {
        let name = match format {
            PackageFormat::Rpm => "filebeat.rpm",
            PackageFormat::Deb => "filebeat.deb",
        };
        let path = self.dir.join(name);
        std::fs::read(&path)
            .with_context(|| format!("cannot read installer package {}", path.display()))
    }
}
