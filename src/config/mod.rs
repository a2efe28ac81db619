// Runtime configuration for the generation backend

pub mod providers;
pub mod secrets;

pub use providers::{get_provider_preset, ApiProviderPreset, ProviderKind, PROVIDERS};
pub use secrets::SecretsConfig;

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Default timeout for a single upstream generation call
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Everything the generation pipeline needs to reach a provider
#[derive(Clone)]
pub struct GenerationConfig {
    pub provider: &'static ApiProviderPreset,
    pub model: String,
    pub base_url: String,
    /// None means requests fail with a configuration error
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl GenerationConfig {
    /// Build a config from a provider ID, applying optional overrides
    pub fn for_provider(
        provider_id: &str,
        model: Option<String>,
        base_url: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self> {
        let provider = get_provider_preset(provider_id).ok_or_else(|| {
            anyhow!(
                "Unknown provider '{}' (expected one of: {})",
                provider_id,
                providers::provider_ids()
            )
        })?;

        Ok(Self {
            provider,
            model: model
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| provider.default_model.to_string()),
            base_url: base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| provider.base_url.to_string()),
            api_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keep the key out of debug output
impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("provider", &self.provider.id)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
