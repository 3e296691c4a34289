//! Application services — use-case orchestration over ports.

pub mod input_service;
pub mod install_service;
