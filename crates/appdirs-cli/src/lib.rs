//! Command-line adapter for `appdirs-core`.
//!
//! Parses arguments, wires a `DirResolver` in `bootstrap`, and prints the
//! requested directories. All path logic lives in the core crate.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
