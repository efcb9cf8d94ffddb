//! PROMPT.md generation.
//!
//! - **Template**: `{variable}` substitution engine
//! - **Document**: the PROMPT.md layout and its rendering
//! - **Generator**: preview or write the rendered document

mod document;
mod generator;
mod template;

pub use document::PromptDocument;
pub use generator::generate_prompt;
pub use template::TemplateError;
