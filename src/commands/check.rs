//! Implementation of `--check`.

use crate::config::Config;
use crate::context::ProjectContext;
use crate::exit_codes;
use crate::probe::probe_files;
use crate::validate::validate_environment;

/// Validate the environment and, if it is ready, show which ralph files exist.
pub fn cmd_check(ctx: &ProjectContext, config: &Config) -> i32 {
    println!("Validating environment...");
    let result = validate_environment(ctx, config);

    if !result.is_valid() {
        result.print_failure("Environment validation failed:");
        return exit_codes::USER_ERROR;
    }

    println!("Environment OK");
    let files = probe_files(ctx);
    println!("  PROMPT.md exists: {}", files.prompt_exists);
    println!("  Config exists: {}", files.config_exists);
    println!("  Specs exist: {}", files.specs_exists);

    exit_codes::SUCCESS
}
