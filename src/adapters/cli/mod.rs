//! CLI Adapter
//!
//! Command-line interface for the token finder.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{log_directive, CliApp};
