// Markdown decoration stripping for generated prose

use regex::Regex;
use std::sync::OnceLock;

// Applied in order; each later pattern runs on the output of the earlier ones.
static BOLD_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMPHASIS_PATTERN: OnceLock<Regex> = OnceLock::new();
static HEADING_PATTERN: OnceLock<Regex> = OnceLock::new();
static CODE_PATTERN: OnceLock<Regex> = OnceLock::new();
static UNDERSCORE_RUN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_bold_pattern() -> &'static Regex {
    BOLD_PATTERN.get_or_init(|| Regex::new(r"\*\*").unwrap())
}

fn get_emphasis_pattern() -> &'static Regex {
    EMPHASIS_PATTERN.get_or_init(|| Regex::new(r"\*").unwrap())
}

fn get_heading_pattern() -> &'static Regex {
    HEADING_PATTERN.get_or_init(|| Regex::new(r"#+\s?").unwrap())
}

fn get_code_pattern() -> &'static Regex {
    CODE_PATTERN.get_or_init(|| Regex::new(r"`").unwrap())
}

fn get_underscore_run_pattern() -> &'static Regex {
    UNDERSCORE_RUN_PATTERN.get_or_init(|| Regex::new(r"_{2,}").unwrap())
}

/// Strip markdown decoration from LLM output.
///
/// Removes bold markers, single `*`, heading markers (`#` runs plus one
/// optional whitespace char), backticks and runs of two or more underscores,
/// in that order, then trims the whole string. Line breaks inside the text
/// are kept as-is.
pub fn normalize(text: &str) -> String {
    let patterns = [
        get_bold_pattern(),
        get_emphasis_pattern(),
        get_heading_pattern(),
        get_code_pattern(),
        get_underscore_run_pattern(),
    ];

    let mut result = text.to_string();
    for pattern in patterns {
        result = pattern.replace_all(&result, "").into_owned();
    }

    trim_text(&result).to_string()
}

/// Trim whitespace and byte-order marks from both ends
pub(crate) fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
