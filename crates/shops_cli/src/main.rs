//! `shops` command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! shops add --filename shops.db -n Acme -p Widget --price 10
//! shops display --filename shops.db
//! shops select --filename shops.db -s Acme
//! ```

mod args;
mod commands;

use args::Cli;
use clap::Parser;
use commands::CliError;
use log::error;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let result = run(&cli, &mut stdout.lock());
    exit_code(result, &mut std::io::stderr())
}

/// Starts file logging when a log directory is configured, then dispatches.
fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(shops_core::default_log_level());
        shops_core::init_logging(level, log_dir)?;
    }

    commands::run(&cli.command, out)
}

/// Maps the outcome to an exit code; failures are reported on `stderr`.
fn exit_code(result: Result<(), CliError>, stderr: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=command module=cli status=error error={err}");
            let _ = writeln!(stderr, "shops: {err}");
            ExitCode::FAILURE
        }
    }
}
