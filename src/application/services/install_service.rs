//! Application service — Filebeat package install and service restart.
//!
//! Install stages the installer payload in a temp file, invokes the host's
//! package manager on it, and removes the staged file when done. Restart goes
//! through systemctl. Both are independent of the configuration document —
//! a failure here never corrupts the managed file.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, InstallerSource, PackageFormat};
use crate::domain::error::InstallError;

/// Package installs unpack and run post-install scripts; give them room.
const INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Install the Filebeat package for `format` using the host package manager.
///
/// # Errors
///
/// Returns an error if the payload is unavailable, the staged file cannot be
/// written, or the package manager exits non-zero.
pub async fn install(
    runner: &impl CommandRunner,
    source: &impl InstallerSource,
    format: PackageFormat,
) -> Result<()> {
    let payload = source.installer_bytes(format)?;

    let staged = tempfile::Builder::new()
        .prefix("filebeat-")
        .suffix(format.extension())
        .tempfile()
        .context("cannot create temp file for installer")?;
    std::fs::write(staged.path(), &payload)
        .with_context(|| format!("cannot write {}", staged.path().display()))?;

    let staged_path = staged.path().to_string_lossy().into_owned();
    let output = runner
        .run_with_timeout(format.tool(), &["-i", &staged_path], INSTALL_TIMEOUT)
        .await?;
    // `staged` is dropped after this point, deleting the payload file.

    if !output.status.success() {
        return Err(InstallError::PackageManager {
            tool: format.tool().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }
    Ok(())
}

/// Restart the filebeat unit via systemctl.
///
/// # Errors
///
/// Returns [`InstallError::ServiceRestart`] if systemctl exits non-zero.
pub async fn restart_service(runner: &impl CommandRunner) -> Result<()> {
    let output = runner.run("systemctl", &["restart", "filebeat"]).await?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(InstallError::ServiceRestart(stderr).into());
    }
    Ok(())
}
