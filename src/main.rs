//! Strata: declarative git layer sync.
//!
//! This is the main entry point for the `strata` CLI. It parses arguments,
//! initializes logging, dispatches to the appropriate command handler, and
//! maps errors to process exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod sync;
pub mod url;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
