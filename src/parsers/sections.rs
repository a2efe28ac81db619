// Heading-driven section segmentation
//
// The heading table is shared with the system prompt in `templates::builtin`.
// Changing one without the other breaks segmentation.

use super::normalizer::trim_text;
use crate::models::{SectionKey, SectionMap};

/// A section key and the uppercase fragments that start it
#[derive(Debug, Clone, Copy)]
pub struct HeadingRule {
    pub key: SectionKey,
    pub triggers: &'static [&'static str],
}

impl HeadingRule {
    /// Check an already-uppercased line against this rule
    pub fn matches(&self, upper_line: &str) -> bool {
        self.triggers.iter().any(|t| upper_line.contains(t))
    }
}

/// Heading rules in match order. The first matching rule wins.
pub static HEADING_TABLE: &[HeadingRule] = &[
    HeadingRule {
        key: SectionKey::ProductOverview,
        triggers: &["PRODUCT OVERVIEW", "1. PRODUCT OVERVIEW"],
    },
    HeadingRule {
        key: SectionKey::SuccessMetrics,
        triggers: &["SUCCESS METRICS", "2. SUCCESS METRICS", "KPIS"],
    },
    HeadingRule {
        key: SectionKey::UserPersonas,
        triggers: &["USER PERSONAS", "3. USER PERSONAS"],
    },
    HeadingRule {
        key: SectionKey::MvpScope,
        triggers: &["MVP SCOPE", "4. MVP SCOPE", "PRIORITIZATION"],
    },
    HeadingRule {
        key: SectionKey::UserFlows,
        triggers: &["USER FLOWS", "5. USER FLOWS"],
    },
    HeadingRule {
        key: SectionKey::UserStories,
        triggers: &["USER STORIES", "6. USER STORIES"],
    },
    HeadingRule {
        key: SectionKey::AcceptanceCriteria,
        triggers: &["ACCEPTANCE CRITERIA", "7. ACCEPTANCE CRITERIA"],
    },
    HeadingRule {
        key: SectionKey::KeyRisks,
        triggers: &["KEY RISKS", "8. KEY RISKS", "MITIGATION"],
    },
];

/// Find the section a line starts, if it is a heading line
pub fn classify_line(line: &str) -> Option<SectionKey> {
    let upper = line.to_uppercase();
    HEADING_TABLE
        .iter()
        .find(|rule| rule.matches(&upper))
        .map(|rule| rule.key)
}

/// Split normalized text into the eight requirement sections.
///
/// Heading lines are consumed. Lines before the first heading are dropped.
/// A repeated heading replaces whatever its section held before. Never fails:
/// text without any heading yields eight empty sections.
pub fn segment(text: &str) -> SectionMap {
    let mut result = SectionMap::default();
    let mut current: Option<SectionKey> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if let Some(key) = classify_line(line) {
            if let Some(active) = current {
                result.set(active, commit(&buffer));
            }
            current = Some(key);
            buffer.clear();
        } else if current.is_some() {
            buffer.push(line);
        }
    }

    if let Some(active) = current {
        result.set(active, commit(&buffer));
    }

    result
}

fn commit(buffer: &[&str]) -> String {
    trim_text(&buffer.join("\n")).to_string()
}
