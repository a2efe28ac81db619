// Parsers for LLM-generated requirement documents
//
// Generated prose goes through `normalize` first, then `segment`.

pub mod normalizer;
pub mod sections;

pub use normalizer::normalize;
pub use sections::{segment, HeadingRule, HEADING_TABLE};

use crate::models::GenerationResult;

/// Clean raw LLM output and split it into sections
pub fn parse_generated(raw: &str) -> GenerationResult {
    let raw_content = normalize(raw);
    let sections = segment(&raw_content);
    GenerationResult {
        raw_content,
        sections,
    }
}
