//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`. All error
//! types implement `thiserror::Error` and convert to `anyhow::Error` via the
//! `?` operator.

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// Invariant violations found by the validator. Persisting is blocked while
/// any of these hold.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no inputs configured")]
    NoInputs,

    #[error("input type is missing for input {0}")]
    MissingInputType(usize),

    #[error("no paths configured for input {0}")]
    NoPaths(usize),

    #[error("no Kafka hosts configured")]
    NoKafkaHosts,

    #[error("Kafka topic is missing")]
    MissingKafkaTopic,
}

// ── Install errors ────────────────────────────────────────────────────────────

/// Failures from the package-manager and service-manager collaborators.
/// These never touch the configuration document.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("unsupported OS: {0}")]
    UnsupportedOs(String),

    #[error("{tool} exited with an error: {stderr}")]
    PackageManager { tool: String, stderr: String },

    #[error("failed to restart filebeat with systemctl: {0}")]
    ServiceRestart(String),
}
