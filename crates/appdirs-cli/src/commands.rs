//! Main commands enum.

use clap::Subcommand;

/// Directory kinds and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Per-user application data directory
    UserData,

    /// Per-user configuration directory
    UserConfig,

    /// Per-user cache directory
    UserCache,

    /// Per-user log directory
    UserLog,

    /// Machine-wide application data directory (or directories with --multipath)
    SiteData,

    /// Machine-wide configuration directory (or directories with --multipath)
    SiteConfig,

    /// Show every directory kind at once
    All,

    /// List supported platform identifiers
    Platforms,
}
