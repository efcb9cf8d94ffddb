//! ralph-bridge: prepare and launch ralph-orchestrator loops.
//!
//! This is the main entry point for the `ralph-bridge` CLI. It parses
//! arguments, resolves the project rooted at the invocation directory,
//! dispatches the requested actions, and turns the outcome into an exit code.

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod exit_codes;
mod git;
mod launcher;
mod probe;
mod prompt;
mod report;
mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use context::ProjectContext;
use error::Result;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(exit_codes::to_process_byte(code)),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(exit_codes::to_process_byte(err.exit_code()))
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let ctx = ProjectContext::resolve()?;
    debug!(root = %ctx.root.display(), "resolved project");

    commands::dispatch(cli, &ctx)
}

/// Logs go to stderr so stdout carries only reports and the child's output.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
