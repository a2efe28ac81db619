// Builtin LLM provider presets
//
// Each provider is a hosted text-generation API reachable over HTTPS.
// The base URL can be overridden at startup (e.g. for a proxy or a mock server).

use serde::{Deserialize, Serialize};

/// Wire protocol spoken by a provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Gemini,
    OpenAi,
}

/// A builtin provider preset
/// Note: This is hardcoded data, not deserialized from files
#[derive(Debug, Clone)]
pub struct ApiProviderPreset {
    /// Provider ID (e.g., "gemini", "openai")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Wire protocol
    pub kind: ProviderKind,
    /// Base URL for the API
    pub base_url: &'static str,
    /// Model used when none is configured
    pub default_model: &'static str,
    /// Environment variable holding the API key
    pub api_key_env: &'static str,
}

/// Builtin provider presets
pub static PROVIDERS: &[ApiProviderPreset] = &[
    ApiProviderPreset {
        id: "gemini",
        name: "Google Gemini",
        kind: ProviderKind::Gemini,
        base_url: "https://generativelanguage.googleapis.com",
        default_model: "gemini-2.0-flash",
        api_key_env: "GEMINI_API_KEY",
    },
    ApiProviderPreset {
        id: "openai",
        name: "OpenAI",
        kind: ProviderKind::OpenAi,
        base_url: "https://api.openai.com",
        default_model: "gpt-4o-mini",
        api_key_env: "OPENAI_API_KEY",
    },
];

/// Get a provider preset by ID
pub fn get_provider_preset(id: &str) -> Option<&'static ApiProviderPreset> {
    PROVIDERS.iter().find(|p| p.id == id)
}

/// Comma-separated list of known provider IDs, for error messages
pub fn provider_ids() -> String {
    PROVIDERS.iter().map(|p| p.id).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_provider_preset() {
        let gemini = get_provider_preset("gemini");
        assert!(gemini.is_some());
        let gemini = gemini.unwrap();
        assert_eq!(gemini.kind, ProviderKind::Gemini);
        assert_eq!(gemini.api_key_env, "GEMINI_API_KEY");

        let openai = get_provider_preset("openai").unwrap();
        assert_eq!(openai.kind, ProviderKind::OpenAi);
        assert_eq!(openai.base_url, "https://api.openai.com");

        assert!(get_provider_preset("anthropic").is_none());
    }

    #[test]
    fn test_provider_ids_unique() {
        for (i, a) in PROVIDERS.iter().enumerate() {
            for b in &PROVIDERS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        assert_eq!(provider_ids(), "gemini, openai");
    }
}
