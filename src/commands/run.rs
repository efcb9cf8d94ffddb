//! Implementation of `--run`.

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::{BridgeError, Result};
use crate::exit_codes;
use crate::launcher::run_loop;
use crate::report::report_results;
use crate::validate::validate_environment;
use tracing::debug;

/// Re-validate, launch the autonomous loop, and report how it ended.
///
/// Validation runs in dry-run mode too; the report is skipped there. A missing
/// `PROMPT.md` starts nothing but is still reported as a failed loop.
pub fn cmd_run(cli: &Cli, ctx: &ProjectContext, config: &Config) -> Result<i32> {
    let validation = validate_environment(ctx, config);
    if !validation.is_valid() {
        validation.print_failure("Cannot run - environment validation failed:");
        return Ok(exit_codes::USER_ERROR);
    }

    let max_iterations = cli.max_iterations.unwrap_or(config.max_iterations);
    let backend = cli.backend.as_deref().unwrap_or(&config.backend);
    debug!(max_iterations, backend, "resolved loop parameters");

    let code = match run_loop(ctx, config, max_iterations, backend, cli.dry_run) {
        Ok(code) => code,
        Err(err @ BridgeError::MissingPrompt(_)) => {
            println!("Error: {}", err);
            exit_codes::USER_ERROR
        }
        Err(err) => return Err(err),
    };

    if !cli.dry_run {
        report_results(code);
    }

    Ok(code)
}
