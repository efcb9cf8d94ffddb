//! Existence checks for the files ralph works with.

use crate::context::ProjectContext;
use tracing::debug;

/// Which ralph inputs already exist in the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStatus {
    /// `PROMPT.md` exists at the root.
    pub prompt_exists: bool,
    /// `ralph.yml` or `.ralph/config.yml` exists.
    pub config_exists: bool,
    /// `specs/` or `.ralph/specs/` exists.
    pub specs_exists: bool,
}

/// Probe the project for existing ralph files.
///
/// A missing path is a `false` flag, never an error.
pub fn probe_files(ctx: &ProjectContext) -> FileStatus {
    let status = FileStatus {
        prompt_exists: ctx.prompt_path.exists(),
        config_exists: ctx.ralph_config_candidates().iter().any(|p| p.exists()),
        specs_exists: ctx.specs_candidates().iter().any(|p| p.exists()),
    };
    debug!(?status, "probed project files");
    status
}
