//! Project context resolution for the ralph bridge.
//!
//! Every component operates against a project rooted at the invocation
//! directory. The root is resolved once in `main` and passed explicitly to
//! the validator, prober, generator, and launcher so none of them touch the
//! process working directory on their own.

use crate::error::{BridgeError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the prompt file consumed by `ralph run`.
pub const PROMPT_FILE: &str = "PROMPT.md";

/// Directory ralph keeps its own state, logs, and nested config in.
pub const RALPH_DIR: &str = ".ralph";

/// Primary ralph config file at the project root.
pub const RALPH_CONFIG_FILE: &str = "ralph.yml";

/// Alternate ralph config file nested under `.ralph/`.
pub const RALPH_NESTED_CONFIG_FILE: &str = "config.yml";

/// Spec directory name, at the root or nested under `.ralph/`.
pub const SPECS_DIR: &str = "specs";

/// Bridge configuration file nested under `.ralph/`.
pub const BRIDGE_CONFIG_FILE: &str = "bridge.yml";

/// Resolved paths for a project the bridge operates on.
///
/// All paths are derived from `root`; none of them are required to exist.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root (the invocation directory).
    pub root: PathBuf,

    /// `{root}/PROMPT.md`
    pub prompt_path: PathBuf,

    /// `{root}/.git`
    pub git_dir: PathBuf,

    /// `{root}/.ralph`
    pub ralph_dir: PathBuf,
}

impl ProjectContext {
    /// Resolve the project context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            BridgeError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the project context rooted at a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            prompt_path: root.join(PROMPT_FILE),
            git_dir: root.join(".git"),
            ralph_dir: root.join(RALPH_DIR),
            root,
        }
    }

    /// `{root}/ralph.yml` followed by `{root}/.ralph/config.yml`.
    pub fn ralph_config_candidates(&self) -> [PathBuf; 2] {
        [
            self.root.join(RALPH_CONFIG_FILE),
            self.ralph_dir.join(RALPH_NESTED_CONFIG_FILE),
        ]
    }

    /// `{root}/specs` followed by `{root}/.ralph/specs`.
    pub fn specs_candidates(&self) -> [PathBuf; 2] {
        [self.root.join(SPECS_DIR), self.ralph_dir.join(SPECS_DIR)]
    }

    /// `{root}/.ralph/bridge.yml`
    pub fn bridge_config_path(&self) -> PathBuf {
        self.ralph_dir.join(BRIDGE_CONFIG_FILE)
    }
}
