// Prompt rendering for requirement generation

pub mod builtin;

use anyhow::{anyhow, Result};
use tera::{Context, Tera};

pub use builtin::REQUIREMENTS_SYSTEM_PROMPT;

/// Render the user-facing part of the prompt for an idea
pub fn render_idea_prompt(idea: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("idea", idea);

    // autoescape off: the output is plain text, not HTML
    Tera::one_off(builtin::IDEA_PROMPT_TEMPLATE, &context, false)
        .map_err(|e| anyhow!("Failed to render idea prompt: {}", e))
}

/// System prompt and idea joined into a single message, for providers
/// without a separate system role
pub fn render_combined_prompt(idea: &str) -> Result<String> {
    let idea_prompt = render_idea_prompt(idea)?;
    Ok(format!("{}\n\n{}", REQUIREMENTS_SYSTEM_PROMPT, idea_prompt))
}
