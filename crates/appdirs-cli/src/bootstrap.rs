//! CLI bootstrap - the composition root.
//!
//! Turns parsed arguments into a `DirResolver` and the `DirOptions` every
//! handler resolves with.

use appdirs_core::{DirOptions, DirResolver, Platform};

use crate::error::CliError;
use crate::parser::Cli;

/// Fully composed context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Resolver for the selected platform, reading the process environment.
    pub resolver: DirResolver,
    /// Application parameters from the global flags.
    pub options: DirOptions,
    /// Emit JSON instead of plain text.
    pub json: bool,
}

/// Select the platform and collect the request parameters.
///
/// An empty `--platform` / `APPDIRS_PLATFORM` means the host platform.
pub fn bootstrap(cli: &Cli) -> Result<CliContext, CliError> {
    let platform = match cli.platform.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.parse::<Platform>()?,
        _ => Platform::current(),
    };
    tracing::debug!(%platform, "selected platform profile");

    Ok(CliContext {
        resolver: DirResolver::for_platform(platform),
        options: options_from(cli),
        json: cli.json,
    })
}

fn options_from(cli: &Cli) -> DirOptions {
    DirOptions {
        appname: cli.appname.clone(),
        appauthor: cli.appauthor.clone(),
        version: cli.app_version.clone(),
        roaming: cli.roaming,
        multipath: cli.multipath,
    }
}
