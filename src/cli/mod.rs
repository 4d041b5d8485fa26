//! CLI module
//!
//! The binary takes no options: everything is configured through the
//! environment (see [`crate::config`]).

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
