//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Print per-application directories for the current (or another) platform.
#[derive(Debug, Parser)]
#[command(name = "appdirs")]
#[command(about = "Show where an application should keep its data, config, cache and logs")]
#[command(version)]
pub struct Cli {
    /// Platform conventions to use (windows, macos, unix). Defaults to the host
    #[arg(long, env = "APPDIRS_PLATFORM", global = true)]
    pub platform: Option<String>,

    /// Application name
    #[arg(short = 'n', long, global = true)]
    pub appname: Option<String>,

    /// Application author or company (Windows only)
    #[arg(short = 'a', long, global = true)]
    pub appauthor: Option<String>,

    /// Application version folder
    #[arg(long = "app-version", global = true)]
    pub app_version: Option<String>,

    /// Use the roaming profile (Windows user data and config)
    #[arg(long, global = true)]
    pub roaming: bool,

    /// List every site directory instead of only the preferred one
    #[arg(long, global = true)]
    pub multipath: bool,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
