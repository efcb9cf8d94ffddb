//! CLI argument parsing for the ralph bridge.
//!
//! Uses clap derive macros for declarative argument definitions. The surface
//! is a set of combinable action flags rather than subcommands; the order in
//! which actions run is fixed by `commands::dispatch`, not by flag order.

use clap::{ArgAction, CommandFactory, Parser};

const AFTER_HELP: &str = "\
Examples:
  ralph-bridge --check
  ralph-bridge --plan \"Add authentication\" --run
  ralph-bridge --generate --title \"Feature\" --tasks \"task1\" \"task2\" --run
  ralph-bridge --run --max-iterations 100";

/// Ralph bridge: prepare PROMPT.md and launch ralph-orchestrator.
///
/// Validates the environment, generates the prompt file, starts an
/// interactive planning session, and runs the autonomous loop.
#[derive(Parser, Debug)]
#[command(name = "ralph-bridge")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Validate environment (ralph, git, etc.)
    #[arg(long)]
    pub check: bool,

    /// Run PDD planning session with this description
    #[arg(long, value_name = "DESCRIPTION")]
    pub plan: Option<String>,

    /// Generate PROMPT.md from --title and --tasks
    #[arg(long)]
    pub generate: bool,

    /// Title for generated PROMPT.md
    #[arg(long)]
    pub title: Option<String>,

    /// Task list for generated PROMPT.md
    #[arg(long, num_args = 1.., value_name = "TASK")]
    pub tasks: Vec<String>,

    /// Additional context for PROMPT.md
    #[arg(long)]
    pub context: Option<String>,

    /// Execute ralph run after plan/generate
    #[arg(long)]
    pub run: bool,

    /// Iteration limit (default: 50, or max_iterations from .ralph/bridge.yml)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_iterations: Option<u32>,

    /// Backend to use (default: claude, or backend from .ralph/bridge.yml)
    #[arg(long, value_name = "NAME")]
    pub backend: Option<String>,

    /// Preview without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Planning description, if a non-empty one was given. `--plan ""` requests nothing.
    pub fn plan_description(&self) -> Option<&str> {
        self.plan.as_deref().filter(|description| !description.is_empty())
    }

    /// Whether any of `--check`, `--generate`, `--plan`, or `--run` was given.
    pub fn has_action(&self) -> bool {
        self.check || self.generate || self.plan_description().is_some() || self.run
    }

    /// Print the full help text to stdout.
    pub fn print_help() {
        // A failed write to stdout leaves nothing useful to report.
        let _ = Cli::command().print_help();
    }
}
