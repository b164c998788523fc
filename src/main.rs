//! spritecrop CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to one
//! of the batch pipelines, and exit with appropriate status.
//! For programmatic use, prefer the library API (`spritecrop::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
