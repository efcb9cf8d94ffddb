//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Configuration for the bridge.
///
/// This struct represents the contents of `.ralph/bridge.yml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program invoked for `plan` and `run`, and looked up on PATH by `--check`.
    #[serde(default = "default_ralph_command")]
    pub ralph_command: String,

    /// Iteration cap passed to `ralph run` when `--max-iterations` is omitted.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Backend passed to `ralph run` when `--backend` is omitted.
    #[serde(default = "default_backend")]
    pub backend: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ralph_command: default_ralph_command(),
            max_iterations: default_max_iterations(),
            backend: default_backend(),
        }
    }
}

pub(crate) fn default_ralph_command() -> String {
    "ralph".to_string()
}

pub(crate) fn default_max_iterations() -> u32 {
    50
}

pub(crate) fn default_backend() -> String {
    "claude".to_string()
}
