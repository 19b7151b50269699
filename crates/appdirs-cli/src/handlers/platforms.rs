//! `platforms` command handler.

use std::io::Write;

use anyhow::Result;
use appdirs_core::Platform;

/// List every supported platform with the identifiers it accepts.
/// The host platform is marked with `*`.
pub fn execute(json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let names: Vec<&str> = Platform::ALL.iter().map(|p| p.name()).collect();
        writeln!(out, "{}", serde_json::to_string(&names)?)?;
        return Ok(());
    }

    let current = Platform::current();
    for platform in Platform::ALL {
        let marker = if platform == current { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<8} {}",
            platform.name(),
            platform.aliases().join(", ")
        )?;
    }
    Ok(())
}
