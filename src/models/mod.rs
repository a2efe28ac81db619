// Data models matching the frontend JSON contract

use serde::{Deserialize, Serialize};

/// One of the eight fixed requirement sections, in presentation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    ProductOverview,
    SuccessMetrics,
    UserPersonas,
    MvpScope,
    UserFlows,
    UserStories,
    AcceptanceCriteria,
    KeyRisks,
}

impl SectionKey {
    /// Returns all section keys in presentation order
    pub fn all() -> &'static [SectionKey] {
        &[
            SectionKey::ProductOverview,
            SectionKey::SuccessMetrics,
            SectionKey::UserPersonas,
            SectionKey::MvpScope,
            SectionKey::UserFlows,
            SectionKey::UserStories,
            SectionKey::AcceptanceCriteria,
            SectionKey::KeyRisks,
        ]
    }

    /// Returns the JSON field name of this section
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::ProductOverview => "productOverview",
            SectionKey::SuccessMetrics => "successMetrics",
            SectionKey::UserPersonas => "userPersonas",
            SectionKey::MvpScope => "mvpScope",
            SectionKey::UserFlows => "userFlows",
            SectionKey::UserStories => "userStories",
            SectionKey::AcceptanceCriteria => "acceptanceCriteria",
            SectionKey::KeyRisks => "keyRisks",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section text keyed by [`SectionKey`].
///
/// Every key is a field, so all eight are always serialized, empty or not.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionMap {
    pub product_overview: String,
    pub success_metrics: String,
    pub user_personas: String,
    pub mvp_scope: String,
    pub user_flows: String,
    pub user_stories: String,
    pub acceptance_criteria: String,
    pub key_risks: String,
}

impl SectionMap {
    pub fn get(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::ProductOverview => &self.product_overview,
            SectionKey::SuccessMetrics => &self.success_metrics,
            SectionKey::UserPersonas => &self.user_personas,
            SectionKey::MvpScope => &self.mvp_scope,
            SectionKey::UserFlows => &self.user_flows,
            SectionKey::UserStories => &self.user_stories,
            SectionKey::AcceptanceCriteria => &self.acceptance_criteria,
            SectionKey::KeyRisks => &self.key_risks,
        }
    }

    /// Replace the content of a section. Earlier content is discarded.
    pub fn set(&mut self, key: SectionKey, content: String) {
        let slot = match key {
            SectionKey::ProductOverview => &mut self.product_overview,
            SectionKey::SuccessMetrics => &mut self.success_metrics,
            SectionKey::UserPersonas => &mut self.user_personas,
            SectionKey::MvpScope => &mut self.mvp_scope,
            SectionKey::UserFlows => &mut self.user_flows,
            SectionKey::UserStories => &mut self.user_stories,
            SectionKey::AcceptanceCriteria => &mut self.acceptance_criteria,
            SectionKey::KeyRisks => &mut self.key_risks,
        };
        *slot = content;
    }

    /// Iterate over (key, content) pairs in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> + '_ {
        SectionKey::all().iter().map(move |key| (*key, self.get(*key)))
    }

    /// True when no heading was recognised at all
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, content)| content.is_empty())
    }

    /// Number of sections with non-empty content
    pub fn filled_count(&self) -> usize {
        self.iter().filter(|(_, content)| !content.is_empty()).count()
    }
}

/// Request body for the generate endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-text startup idea; validated by the generation pipeline
    #[serde(default)]
    pub idea: Option<String>,
}

/// Normalized LLM output plus its sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub raw_content: String,
    pub sections: SectionMap,
}
