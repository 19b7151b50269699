//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ..., out: &mut dyn Write) -> Result<()>`
//! - Thin wrappers that call the resolver and format output
//! - Output goes to the writer they are given so tests can capture it

pub mod all;
pub mod dir;
pub mod platforms;

use std::io::Write;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::Commands;

/// Route a command to its handler.
pub fn dispatch(ctx: &CliContext, command: Commands, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::UserData => dir::execute(ctx, dir::DirKind::UserData, out),
        Commands::UserConfig => dir::execute(ctx, dir::DirKind::UserConfig, out),
        Commands::UserCache => dir::execute(ctx, dir::DirKind::UserCache, out),
        Commands::UserLog => dir::execute(ctx, dir::DirKind::UserLog, out),
        Commands::SiteData => dir::execute(ctx, dir::DirKind::SiteData, out),
        Commands::SiteConfig => dir::execute(ctx, dir::DirKind::SiteConfig, out),
        Commands::All => all::execute(ctx, out),
        Commands::Platforms => platforms::execute(ctx.json, out),
    }
}
