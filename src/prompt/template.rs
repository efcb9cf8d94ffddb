//! Template engine for `{variable}` substitution.
//!
//! - `{name}` substitutes the value of variable `name` (surrounding whitespace
//!   inside the braces is ignored)
//! - `{{` renders a literal `{` and `}}` a literal `}`
//!
//! Substituted values are inserted verbatim and never re-scanned, so task text
//! containing braces comes out exactly as written. Undefined variables are an
//! error rather than an empty substitution.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// Render a template string by substituting variables.
///
/// ```text
/// render_template("# {title}", &vars([("title", "Auth")])) == Ok("# Auth")
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(idx) = rest.find(['{', '}']) {
        out.push_str(&rest[..idx]);
        let position = offset + idx;
        let tail = &rest[idx..];

        let consumed = if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            tail.len() - after.len()
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            tail.len() - after.len()
        } else if tail.starts_with('}') {
            // A lone closing brace is ordinary text.
            out.push('}');
            1
        } else {
            let close = tail
                .find('}')
                .ok_or(TemplateError::UnmatchedBrace { position })?;
            let name = tail[1..close].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyVariableName { position });
            }
            let value = variables
                .get(name)
                .ok_or_else(|| TemplateError::UndefinedVariable {
                    name: name.to_string(),
                    position,
                })?;
            out.push_str(value);
            close + 1
        };

        rest = &tail[consumed..];
        offset = position + consumed;
    }

    out.push_str(rest);
    Ok(out)
}

/// Build a variables map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
