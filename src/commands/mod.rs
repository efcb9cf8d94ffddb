//! Command implementations for the ralph bridge.
//!
//! This module provides the dispatcher that runs the requested actions in
//! their fixed order: check (exclusive), generate, plan, run.

mod check;
mod generate;
mod run;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::exit_codes;
use crate::launcher;
use tracing::debug;

/// Run every action requested on the command line and return the exit code.
///
/// With no action the help text is printed and 1 returned before
/// `.ralph/bridge.yml` is read, so a broken config never hides the usage.
pub fn dispatch(cli: &Cli, ctx: &ProjectContext) -> Result<i32> {
    if !cli.has_action() {
        Cli::print_help();
        return Ok(exit_codes::USER_ERROR);
    }

    let config = Config::load_for(ctx)?;
    debug!(?config, "loaded bridge config");
    run_actions(cli, ctx, &config)
}

/// Run the requested actions in order with an already loaded `config`.
///
/// - `--check` short-circuits everything else
/// - a failed `--plan` (outside dry-run) stops before `--run`
/// - `--run` returns the loop's own exit code
pub fn run_actions(cli: &Cli, ctx: &ProjectContext, config: &Config) -> Result<i32> {
    if cli.check {
        return Ok(check::cmd_check(ctx, config));
    }

    if cli.generate {
        generate::cmd_generate(cli, ctx)?;
    }

    if let Some(description) = cli.plan_description() {
        let code = launcher::run_plan(ctx, config, description, cli.dry_run)?;
        if code != exit_codes::SUCCESS && !cli.dry_run {
            println!("Planning failed with exit code {}", code);
            return Ok(code);
        }
    }

    if cli.run {
        return run::cmd_run(cli, ctx, config);
    }

    debug!("all requested actions finished");
    Ok(exit_codes::SUCCESS)
}
