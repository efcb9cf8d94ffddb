//! Configuration model for the ralph bridge.
//!
//! This module defines the Config struct that represents `.ralph/bridge.yml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values. Command-line
//! flags always take precedence over the file.

mod model;
mod operations;


pub use model::Config;
