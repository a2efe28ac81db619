// Storage for LLM provider API keys
//
// Keys are read from the provider's environment variable first, then from
// ~/.reqgen/secrets.toml (global only). This file should never be committed.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::providers::ApiProviderPreset;

/// Secrets stored in ~/.reqgen/secrets.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretsConfig {
    /// API tokens indexed by provider ID (e.g., "gemini" -> "AIza...")
    #[serde(default)]
    pub api_tokens: HashMap<String, String>,
}

impl SecretsConfig {
    /// Get the secrets file path (~/.reqgen/secrets.toml)
    pub fn get_secrets_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".reqgen").join("secrets.toml"))
    }

    /// Load secrets from the default location
    pub fn load() -> Result<Self> {
        let path = Self::get_secrets_path()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Self::load_from(&path)
    }

    /// Load secrets from a specific file. A missing file yields no secrets.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read secrets file '{}': {}", path.display(), e))?;

        let config: SecretsConfig = toml::from_str(&contents)
            .map_err(|e| anyhow!("Failed to parse secrets file '{}': {}", path.display(), e))?;

        Ok(config)
    }

    /// Save secrets to a specific file, owner read/write only on Unix
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    anyhow!(
                        "Failed to create secrets directory '{}': {}",
                        parent.display(),
                        e
                    )
                })?;
            }
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize secrets: {}", e))?;

        fs::write(path, contents)
            .map_err(|e| anyhow!("Failed to write secrets file '{}': {}", path.display(), e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, permissions).map_err(|e| {
                anyhow!(
                    "Failed to set permissions on secrets file '{}': {}",
                    path.display(),
                    e
                )
            })?;
        }

        log::info!("Saved secrets to: {}", path.display());
        Ok(())
    }

    /// Get a provider's API token
    pub fn get_token(&self, provider_id: &str) -> Option<&String> {
        self.api_tokens.get(provider_id)
    }

    /// Set a provider's API token
    pub fn set_token(&mut self, provider_id: &str, token: &str) {
        self.api_tokens
            .insert(provider_id.to_string(), token.to_string());
    }
}

/// Store a provider's key in the secrets file, keeping the other providers' keys
pub fn store_api_key(path: &Path, preset: &ApiProviderPreset, key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Refusing to save an empty API key for {}", preset.name));
    }

    let mut secrets = SecretsConfig::load_from(path)?;
    secrets.set_token(preset.id, key);
    secrets.save_to(path)
}

/// Pick the API key for a provider: environment value wins over the file.
/// Blank values count as missing.
pub fn resolve_api_key(
    preset: &ApiProviderPreset,
    env_value: Option<String>,
    secrets: &SecretsConfig,
) -> Option<String> {
    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| {
            secrets
                .get_token(preset.id)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}

/// Resolve the API key from the process environment and the secrets file
pub fn resolve_api_key_from_env(
    preset: &ApiProviderPreset,
    secrets: &SecretsConfig,
) -> Option<String> {
    resolve_api_key(preset, std::env::var(preset.api_key_env).ok(), secrets)
}
