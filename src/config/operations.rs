//! Config loading and validation.

use super::model::Config;
use crate::context::ProjectContext;
use crate::error::{BridgeError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load the bridge config for a project.
    ///
    /// A missing `.ralph/bridge.yml` yields the defaults. A file that exists
    /// but cannot be read, parsed, or validated is an error.
    pub fn load_for(ctx: &ProjectContext) -> Result<Self> {
        let path = ctx.bridge_config_path();

        if !path.is_file() {
            debug!(path = %path.display(), "no bridge config, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading bridge config");
        Self::load(&path)
    }

    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| BridgeError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `ralph_command` must be non-empty
    /// - `backend` must be non-empty
    /// - `max_iterations` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.ralph_command.trim().is_empty() {
            return Err(BridgeError::ConfigError(
                "ralph_command must be non-empty".to_string(),
            ));
        }

        if self.backend.trim().is_empty() {
            return Err(BridgeError::ConfigError(
                "backend must be non-empty".to_string(),
            ));
        }

        if self.max_iterations == 0 {
            return Err(BridgeError::ConfigError(
                "max_iterations must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
