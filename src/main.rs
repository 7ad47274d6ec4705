//! tagver - Version tag parser for CI jobs
//!
//! Reads a version from a source-control reference (`GITHUB_REF` or the
//! `raw` argument), parses it as a PEP 440 or semver-style version and
//! writes its components as `key=value` lines to `GITHUB_OUTPUT` or stdout.

use clap::Parser;
use std::process::ExitCode;
use tagver::cli::CliArgs;
use tagver::orchestrator::{execute, Environment};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    execute(&args, Environment::from_env())?;

    // An invalid version is reported through the outputs, not the exit code
    Ok(ExitCode::SUCCESS)
}
