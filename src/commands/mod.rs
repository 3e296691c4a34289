//! Command implementations

pub mod add_input;
pub mod init;
pub mod install;
pub mod remove_input;
pub mod start;
pub mod update_input;
