//! Environment validation for the ralph bridge.
//!
//! Checks, in order, that:
//! - the ralph CLI is discoverable on PATH
//! - the project root contains a `.git` directory
//! - `HEAD` resolves to a commit (only checked when `.git` exists)
//!
//! Every failing check contributes one remediation message; checks never
//! short-circuit so the user sees all problems at once.

mod program;

pub use program::locate_program;

use crate::config::Config;
use crate::context::ProjectContext;
use crate::git;
use std::ffi::OsString;
use tracing::debug;

/// Remediation for a missing ralph CLI.
pub const RALPH_NOT_FOUND: &str =
    "ralph CLI not found. Install: npm install -g @ralph-orchestrator/ralph-cli";

/// Remediation for a project root without `.git`.
pub const NOT_A_GIT_REPO: &str =
    "Not a git repository. Run: git init && git add . && git commit -m 'init'";

/// Remediation for a repository without any commit.
pub const NO_GIT_COMMITS: &str =
    "No git commits. Run: git add . && git commit -m 'Initial commit'";

/// Outcome of an environment validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Remediation messages, in check order. Empty when the environment is ready.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Whether every check passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Problem report: `header` followed by one `  - <msg>` line per error.
    pub fn failure_lines(&self, header: &str) -> Vec<String> {
        std::iter::once(header.to_string())
            .chain(self.errors.iter().map(|error| format!("  - {}", error)))
            .collect()
    }

    /// Print [`Self::failure_lines`] to stdout.
    pub fn print_failure(&self, header: &str) {
        for line in self.failure_lines(header) {
            println!("{}", line);
        }
    }
}

/// Validate the environment using the process `PATH`.
pub fn validate_environment(ctx: &ProjectContext, config: &Config) -> ValidationResult {
    validate_environment_with_path(ctx, config, std::env::var_os("PATH"))
}

/// Validate the environment against an explicit search path.
pub fn validate_environment_with_path(
    ctx: &ProjectContext,
    config: &Config,
    search_path: Option<OsString>,
) -> ValidationResult {
    let mut errors = Vec::new();

    match locate_program(&config.ralph_command, search_path.as_deref()) {
        Some(path) => debug!(program = %path.display(), "ralph CLI found"),
        None => {
            debug!(program = %config.ralph_command, "ralph CLI not found");
            errors.push(RALPH_NOT_FOUND.to_string());
        }
    }

    if !ctx.git_dir.exists() {
        debug!(path = %ctx.git_dir.display(), "no git metadata directory");
        errors.push(NOT_A_GIT_REPO.to_string());
    } else if !git::has_head_commit(&ctx.root) {
        errors.push(NO_GIT_COMMITS.to_string());
    }

    ValidationResult { errors }
}
