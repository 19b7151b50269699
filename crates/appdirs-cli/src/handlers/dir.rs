//! Single directory handler.
//!
//! Prints one path per line. Site directories requested with
//! `--multipath` print every root, preferred first.

use std::io::Write;

use anyhow::Result;
use appdirs_core::SiteDirs;

use crate::bootstrap::CliContext;

/// Which directory to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    UserData,
    UserConfig,
    UserCache,
    UserLog,
    SiteData,
    SiteConfig,
}

pub fn execute(ctx: &CliContext, kind: DirKind, out: &mut dyn Write) -> Result<()> {
    let resolver = &ctx.resolver;
    let opts = &ctx.options;
    let dirs = match kind {
        DirKind::UserData => SiteDirs::Single(resolver.user_data_dir(opts)),
        DirKind::UserConfig => SiteDirs::Single(resolver.user_config_dir(opts)),
        DirKind::UserCache => SiteDirs::Single(resolver.user_cache_dir(opts)),
        DirKind::UserLog => SiteDirs::Single(resolver.user_log_dir(opts)),
        DirKind::SiteData => resolver.site_data_dir(opts),
        DirKind::SiteConfig => resolver.site_config_dir(opts),
    };
    write_dirs(&dirs, ctx.json, out)
}

fn write_dirs(dirs: &SiteDirs, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(dirs)?)?;
        return Ok(());
    }
    for dir in dirs.iter() {
        writeln!(out, "{dir}")?;
    }
    Ok(())
}
