//! Implementation of `--generate`.

use crate::cli::Cli;
use crate::context::ProjectContext;
use crate::error::{BridgeError, Result};
use crate::prompt::{PromptDocument, generate_prompt};

/// Build PROMPT.md from `--title`, `--tasks`, and `--context`.
///
/// Argument problems are reported before anything is rendered or written.
pub fn cmd_generate(cli: &Cli, ctx: &ProjectContext) -> Result<()> {
    let title = match cli.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => {
            return Err(BridgeError::UserError(
                "--generate requires --title".to_string(),
            ));
        }
    };

    if cli.tasks.is_empty() {
        return Err(BridgeError::UserError(
            "--generate requires --tasks".to_string(),
        ));
    }

    let doc = PromptDocument::new(title, cli.tasks.clone(), cli.context.clone());
    generate_prompt(ctx, &doc, cli.dry_run)?;
    Ok(())
}
