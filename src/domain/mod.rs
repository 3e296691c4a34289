//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`. All functions
//! are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod mutate;
pub mod validate;

#[allow(unused_imports)]
pub use config::{
    FilebeatConfig, FilebeatSection, GlobalFields, InputConfig, InputFields, KafkaConfig, LogFiles,
    LoggingConfig, Multiline, Processor, RecursiveGlob, SetupConfig,
};
#[allow(unused_imports)]
pub use error::{ConfigError, InstallError};
#[allow(unused_imports)]
pub use mutate::{add_input, remove_inputs, update_inputs};
#[allow(unused_imports)]
pub use validate::validate;
