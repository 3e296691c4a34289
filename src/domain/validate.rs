//! Document-level invariant checks.
//!
//! Pure functions only — no I/O, no mutation. Every mutation path runs
//! [`validate`] before the document is persisted; a failure blocks the write
//! and leaves the on-disk file untouched.

use crate::domain::config::FilebeatConfig;
use crate::domain::error::ConfigError;

/// Check all document invariants, short-circuiting on the first violation.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found:
/// - the input list is empty
/// - an input has an empty type tag
/// - an enabled input has no paths
/// - the Kafka sink is enabled with no hosts or no topic
pub fn validate(cfg: &FilebeatConfig) -> Result<(), ConfigError> {
    if cfg.filebeat.inputs.is_empty() {
        return Err(ConfigError::NoInputs);
    }

    for (i, input) in cfg.filebeat.inputs.iter().enumerate() {
        if input.kind.is_empty() {
            return Err(ConfigError::MissingInputType(i));
        }
        if input.enabled && input.paths.is_empty() {
            return Err(ConfigError::NoPaths(i));
        }
    }

    if cfg.output.kafka.enabled {
        if cfg.output.kafka.hosts.is_empty() {
            return Err(ConfigError::NoKafkaHosts);
        }
        if cfg.output.kafka.topic.is_empty() {
            return Err(ConfigError::MissingKafkaTopic);
        }
    }

    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
