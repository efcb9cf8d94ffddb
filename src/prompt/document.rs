//! The PROMPT.md document ralph consumes.

use super::template::{TemplateError, render_template, vars};

/// Fixed layout of PROMPT.md. `{context}` expands to a whole section or nothing.
const PROMPT_TEMPLATE: &str = "\
# {title}

## Objective
Implement the following feature/changes as specified.

## Tasks
{tasks}

{context}## Constraints
- Follow existing code patterns in the codebase
- Run tests after changes
- Commit after each completed task
- Use meaningful commit messages

## Acceptance Criteria
- All tasks completed
- Tests passing
- No linting errors
- Code follows project conventions
";

/// Inputs for a generated PROMPT.md.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    pub title: String,
    /// Rendered as a checklist, in order, each item exactly as given.
    pub tasks: Vec<String>,
    /// Optional free text; an empty string is treated as absent.
    pub context: Option<String>,
}

impl PromptDocument {
    pub fn new(title: impl Into<String>, tasks: Vec<String>, context: Option<String>) -> Self {
        Self {
            title: title.into(),
            tasks,
            context,
        }
    }

    /// Render the Markdown text. Identical inputs always give identical output.
    pub fn render(&self) -> Result<String, TemplateError> {
        let tasks = self
            .tasks
            .iter()
            .map(|task| format!("- [ ] {}", task))
            .collect::<Vec<_>>()
            .join("\n");

        let context = match self.context.as_deref() {
            Some(text) if !text.is_empty() => format!("## Context\n{}\n\n", text),
            _ => String::new(),
        };

        render_template(
            PROMPT_TEMPLATE,
            &vars([
                ("title", self.title.clone()),
                ("tasks", tasks),
                ("context", context),
            ]),
        )
    }
}
