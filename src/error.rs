//! Error types for the ralph bridge.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::context::PROMPT_FILE;
use crate::exit_codes;
use crate::prompt::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bridge operations.
///
/// Every variant is reported locally and never reaches the external `ralph` process.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// User provided invalid arguments or the project is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// `--run` was requested but there is no prompt file to feed the loop.
    #[error("{} not found. Run --plan or --generate first.", PROMPT_FILE)]
    MissingPrompt(PathBuf),

    /// The prompt template could not be rendered.
    #[error("failed to render prompt: {0}")]
    Template(#[from] TemplateError),

    /// A git command could not be executed or exited non-zero.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The external process could not be started.
    #[error("failed to launch {command}: {source}\nFix: ensure ralph is installed and in PATH.")]
    LaunchError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// `.ralph/bridge.yml` could not be read or failed validation.
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// A filesystem write failed.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BridgeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BridgeError::UserError(_)
            | BridgeError::MissingPrompt(_)
            | BridgeError::Template(_)
            | BridgeError::GitError(_)
            | BridgeError::LaunchError { .. }
            | BridgeError::ConfigError(_)
            | BridgeError::Io { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
