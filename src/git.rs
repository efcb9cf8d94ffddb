//! Git queries for the ralph bridge.
//!
//! The bridge only ever asks git one question: does `HEAD` resolve to a commit?

use crate::error::{BridgeError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Resolve `HEAD` in the repository at `root` to a commit id.
///
/// Fails with [`BridgeError::GitError`] carrying git's stderr when git is
/// missing, `root` is not a repository, or the branch is unborn.
pub fn head_commit<P: AsRef<Path>>(root: P) -> Result<String> {
    let output = Command::new("git")
        .current_dir(root.as_ref())
        .args(["rev-parse", "--verify", "HEAD"])
        .output()
        .map_err(|e| BridgeError::GitError(format!("failed to execute git rev-parse: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BridgeError::GitError(format!(
            "git rev-parse HEAD failed: {}",
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Returns true if `HEAD` resolves to a commit in the repository at `root`.
///
/// Any failure (unborn branch, not a repository, git missing) counts as "no commit".
pub fn has_head_commit<P: AsRef<Path>>(root: P) -> bool {
    match head_commit(root) {
        Ok(commit) => {
            debug!(%commit, "HEAD resolved");
            true
        }
        Err(e) => {
            debug!(error = %e, "HEAD did not resolve");
            false
        }
    }
}
