//! Document model for the Filebeat configuration file.
//!
//! Pure data plus constructors — no I/O, no validation. The struct layout
//! mirrors the on-disk YAML one-to-one, so serde field order defines the
//! canonical key order and repeated encode/decode cycles are byte-stable.
//!
//! Keys the model does not declare are dropped on rewrite. Full forward
//! fidelity was traded for a plain typed model; `fbctl` owns the whole file.

use serde::{Deserialize, Serialize};

/// Default location of the managed configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/filebeat/filebeat.yml";

/// Root aggregate, corresponding 1:1 to the on-disk configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilebeatConfig {
    pub filebeat: FilebeatSection,
    pub output: OutputSection,
    pub logging: LoggingConfig,
    pub setup: SetupConfig,
    pub fields: GlobalFields,
}

/// The `filebeat:` section — log inputs and processors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilebeatSection {
    /// Ordered list of input sources. Order is preserved and meaningful;
    /// the model never deduplicates entries.
    pub inputs: Vec<InputConfig>,
    pub processors: Vec<Processor>,
}

/// The `output:` section. Kafka is the only sink variant modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    pub kafka: KafkaConfig,
}

/// One configured source of log lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub enabled: bool,
    pub recursive_glob: RecursiveGlob,
    pub paths: Vec<String>,
    pub fields: InputFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<Multiline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecursiveGlob {
    pub enabled: bool,
}

/// Routing metadata attached to every record from one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputFields {
    pub projectname: String,
    pub filetype: String,
}

/// Line-continuation grouping rule for multi-line log records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multiline {
    pub pattern: String,
    pub negate: bool,
    #[serde(rename = "match")]
    pub match_mode: String,
    pub max_lines: u32,
    pub timeout: String,
}

/// A record processor. Only `add_host_metadata` is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Processor {
    pub add_host_metadata: AddHostMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddHostMetadata {}

/// Kafka sink settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KafkaConfig {
    pub enabled: bool,
    pub hosts: Vec<String>,
    pub topic: String,
    pub required_acks: i32,
    pub bulk_max_size: u32,
    pub max_message_bytes: u32,
}

/// Filebeat's own log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub to_files: bool,
    pub files: LogFiles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFiles {
    pub path: String,
    pub name: String,
    pub keepfiles: u32,
    pub permissions: String,
}

/// Index setup toggles, both disabled for the Kafka-only pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupConfig {
    #[serde(rename = "template.enabled")]
    pub template_enabled: bool,
    #[serde(rename = "ilm.enabled")]
    pub ilm_enabled: bool,
}

/// Metadata attached to every shipped record regardless of input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalFields {
    pub log_type: String,
}

impl InputConfig {
    /// A standard log-file tailing input: enabled, recursive glob on.
    #[must_use]
    pub fn log_input(project: &str, filetype: &str, paths: Vec<String>) -> Self {
        Self {
            kind: "log".to_string(),
            enabled: true,
            recursive_glob: RecursiveGlob { enabled: true },
            paths,
            fields: InputFields {
                projectname: project.to_string(),
                filetype: filetype.to_string(),
            },
            multiline: None,
        }
    }
}

impl FilebeatConfig {
    /// The hard-coded first-time-setup document: secure and audit log inputs
    /// shipping to the central Kafka cluster.
    #[must_use]
    pub fn default_template() -> Self {
        Self {
            filebeat: FilebeatSection {
                inputs: vec![
                    InputConfig::log_input(
                        "centos-logs",
                        "secure",
                        vec!["/var/log/secure".to_string()],
                    ),
                    InputConfig::log_input(
                        "centos-logs",
                        "audit",
                        vec!["/var/log/audit/audit.log".to_string()],
                    ),
                ],
                processors: vec![Processor {
                    add_host_metadata: AddHostMetadata {},
                }],
            },
            output: OutputSection {
                kafka: KafkaConfig {
                    enabled: true,
                    hosts: vec![
                        "172.1.200.75:9092".to_string(),
                        "172.1.200.76:9092".to_string(),
                        "172.1.200.77:9092".to_string(),
                    ],
                    topic: "centosin_log_topic".to_string(),
                    required_acks: 1,
                    bulk_max_size: 40960,
                    max_message_bytes: 1_000_000,
                },
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                to_files: true,
                files: LogFiles {
                    path: "/var/log/filebeat".to_string(),
                    name: "filebeat.log".to_string(),
                    keepfiles: 7,
                    permissions: "0644".to_string(),
                },
            },
            setup: SetupConfig {
                template_enabled: false,
                ilm_enabled: false,
            },
            fields: GlobalFields {
                log_type: "windows".to_string(),
            },
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
