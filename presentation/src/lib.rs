//! Presentation layer for scout
//!
//! This crate contains the CLI definitions and the console formatter
//! that renders tool listings, records and the smoke-test summary.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{CallArgs, Cli, Command, SpecArgs};
pub use output::console::ConsoleFormatter;
