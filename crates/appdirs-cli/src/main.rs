//! CLI entry point - the composition root.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use appdirs_cli::{Cli, CliError, Commands, bootstrap, handlers, logging};

fn main() -> ExitCode {
    // Load .env first so APPDIRS_PLATFORM and the XDG/Windows variables can come from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Listing platforms must work even when --platform is invalid
    if command == Commands::Platforms {
        handlers::platforms::execute(cli.json, &mut out)?;
    } else {
        let ctx = bootstrap(cli)?;
        handlers::dispatch(&ctx, command, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
