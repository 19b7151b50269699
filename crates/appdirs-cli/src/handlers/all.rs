//! `all` command handler.
//!
//! Resolves and displays every directory kind in `key = value` format,
//! or as a JSON object with `--json`.

use std::io::Write;

use anyhow::Result;
use appdirs_core::ResolvedDirs;

use crate::bootstrap::CliContext;

pub fn execute(ctx: &CliContext, out: &mut dyn Write) -> Result<()> {
    let dirs = ResolvedDirs::resolve(&ctx.resolver, &ctx.options);
    if ctx.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&dirs)?)?;
    } else {
        writeln!(out, "{dirs}")?;
    }
    Ok(())
}
