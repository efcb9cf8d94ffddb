//! Launching `ralph plan` and `ralph run`.
//!
//! Both sessions take over the terminal: the child inherits stdin, stdout,
//! and stderr unchanged, and the bridge blocks until it exits. Only the exit
//! status comes back; the child's output is never read.

use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::{BridgeError, Result};
use crate::exit_codes;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

const RULE_WIDTH: usize = 50;

/// A single external invocation: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Shell-quoted command line, as shown in dry-run output.
    pub fn display(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(&self.args))
    }

    /// Run with inherited stdio in `cwd` and wait for the exit code.
    fn execute(&self, cwd: &Path) -> Result<i32> {
        info!(command = %self.display(), cwd = %cwd.display(), "launching");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| BridgeError::LaunchError {
                command: self.display(),
                source,
            })?;

        let code = exit_code_of(status);
        debug!(%status, code, "child exited");
        Ok(code)
    }
}

/// Exit code of a finished child. A signal death on Unix maps to `128 + signal`,
/// so Ctrl-C surfaces as 130.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    exit_codes::USER_ERROR
}

/// `ralph plan <description>`
pub fn plan_command(config: &Config, description: &str) -> LaunchCommand {
    LaunchCommand {
        program: config.ralph_command.clone(),
        args: vec!["plan".to_string(), description.to_string()],
    }
}

/// `ralph run -a --max-iterations <n> -b <backend>`
///
/// `-a` selects autonomous (headless, no TUI) mode.
pub fn loop_command(config: &Config, max_iterations: u32, backend: &str) -> LaunchCommand {
    LaunchCommand {
        program: config.ralph_command.clone(),
        args: vec![
            "run".to_string(),
            "-a".to_string(),
            "--max-iterations".to_string(),
            max_iterations.to_string(),
            "-b".to_string(),
            backend.to_string(),
        ],
    }
}

fn print_dry_run(command: &LaunchCommand) {
    println!("=== DRY RUN: Would run ===");
    println!("{}", command.display());
}

/// Start an interactive planning session and return its exit code.
///
/// In dry-run mode the command is printed and 0 is returned.
pub fn run_plan(
    ctx: &ProjectContext,
    config: &Config,
    description: &str,
    dry_run: bool,
) -> Result<i32> {
    let command = plan_command(config, description);

    if dry_run {
        print_dry_run(&command);
        return Ok(exit_codes::SUCCESS);
    }

    println!("Starting PDD planning session...");
    println!("Description: {}", description);
    println!("{}", "-".repeat(RULE_WIDTH));

    command.execute(&ctx.root)
}

/// Start the autonomous loop and return its exit code.
///
/// Outside dry-run, `PROMPT.md` must exist; otherwise nothing is started and
/// [`BridgeError::MissingPrompt`] is returned.
pub fn run_loop(
    ctx: &ProjectContext,
    config: &Config,
    max_iterations: u32,
    backend: &str,
    dry_run: bool,
) -> Result<i32> {
    let command = loop_command(config, max_iterations, backend);

    if dry_run {
        print_dry_run(&command);
        return Ok(exit_codes::SUCCESS);
    }

    if !ctx.prompt_path.exists() {
        return Err(BridgeError::MissingPrompt(ctx.prompt_path.clone()));
    }

    println!("Starting ralph orchestration loop...");
    println!("Max iterations: {}", max_iterations);
    println!("Backend: {}", backend);
    println!("{}", "-".repeat(RULE_WIDTH));

    command.execute(&ctx.root)
}
