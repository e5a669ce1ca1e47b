//! Binary entry point for the `meridian-sources` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging based on the `--debug` flag.
//! - Running one reconciliation and translating failures into a diagnostic
//!   on stderr and a non-zero exit code.
//!
//! The reconciliation logic lives in the library crate; this binary is a
//! thin wrapper around it.

mod cli;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.debug {
                // Full error chain plus backtrace context.
                eprintln!("error: {:?}", err);
            } else {
                eprintln!("error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
