//! Preview or write PROMPT.md.

use super::document::PromptDocument;
use crate::context::{PROMPT_FILE, ProjectContext};
use crate::error::{BridgeError, Result};
use std::path::Path;
use tracing::info;

/// Render `doc` and either print it (`dry_run`) or write it to `PROMPT.md`.
///
/// Writing always replaces the whole file; an existing file only earns a
/// warning. Returns the rendered text in both modes.
pub fn generate_prompt(ctx: &ProjectContext, doc: &PromptDocument, dry_run: bool) -> Result<String> {
    let content = doc.render()?;

    if dry_run {
        println!("=== DRY RUN: {} content ===", PROMPT_FILE);
        println!("{}", content);
        println!("=== END DRY RUN ===");
        return Ok(content);
    }

    write_prompt(&ctx.prompt_path, &content)?;
    Ok(content)
}

/// Replace the file at `path` with `content`, warning first if it already
/// exists. Returns whether an existing file was overwritten.
fn write_prompt(path: &Path, content: &str) -> Result<bool> {
    let replaced = path.exists();
    if replaced {
        println!("Warning: {} already exists, overwriting...", PROMPT_FILE);
    }

    std::fs::write(path, content).map_err(|source| BridgeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    info!(path = %shown.display(), bytes = content.len(), replaced, "wrote prompt file");
    println!("Generated: {}", shown.display());

    Ok(replaced)
}
