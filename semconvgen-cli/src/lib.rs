//! # semconvgen-cli
//!
//! Argument parsing and command execution for the `semconvgen` binary.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::run;
