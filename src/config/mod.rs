//! Engine configuration: HTTP settings and per-provider endpoint overrides.
//!
//! Loaded from an optional TOML file; every section falls back to defaults.
//! Environment variables win over the file:
//! - `SAASWIRE_USER_AGENT`
//! - `SAASWIRE_<PROVIDER>_BASE_URL` (e.g. `SAASWIRE_SHOPIFY_BASE_URL`), for
//!   each provider name the caller passes in

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::transport::DEFAULT_USER_AGENT;

/// Complete saaswire configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaaswireConfig {
    #[serde(default)]
    pub http: HttpConfig,
    /// Keyed by provider name (`hubspot`, `zendesk`, `gdrive`, `shopify`, `xero`).
    #[serde(default)]
    pub endpoints: BTreeMap<String, EndpointConfig>,
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

/// Overrides for one provider's endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointConfig {
    /// Replaces the provider's base URL (proxies, sandboxes, mock servers).
    pub base_url: Option<String>,
    /// Replaces the provider's pinned API version, where it has one.
    pub api_version: Option<String>,
}

impl SaaswireConfig {
    /// Load from `path` when given, otherwise defaults; then apply env
    /// overrides for `providers`.
    pub fn load(path: Option<&Path>, providers: &[&str]) -> Result<Self> {
        let mut config = match path {
            Some(path) => load_config(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(providers);
        Ok(config)
    }

    /// Overlay environment variables onto the loaded values. Base URL
    /// variables are read only for the named providers.
    pub fn apply_env_overrides(&mut self, providers: &[&str]) {
        if let Ok(v) = std::env::var("SAASWIRE_USER_AGENT") {
            if !v.is_empty() {
                self.http.user_agent = v;
            }
        }

        for provider in providers {
            let var = base_url_var(provider);
            if let Ok(v) = std::env::var(&var) {
                if !v.is_empty() {
                    self.endpoints.entry(provider.to_string()).or_default().base_url = Some(v);
                }
            }
        }
    }

    pub fn endpoint(&self, provider: &str) -> Option<&EndpointConfig> {
        self.endpoints.get(provider)
    }

    /// Base URL override for `provider`, if any.
    pub fn base_url(&self, provider: &str) -> Option<&str> {
        self.endpoint(provider).and_then(|e| e.base_url.as_deref())
    }

    /// API version override for `provider`, if any.
    pub fn api_version(&self, provider: &str) -> Option<&str> {
        self.endpoint(provider).and_then(|e| e.api_version.as_deref())
    }
}

/// `SAASWIRE_<PROVIDER>_BASE_URL`, with non-alphanumerics mapped to `_`.
pub fn base_url_var(provider: &str) -> String {
    let name: String = provider
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    format!("SAASWIRE_{}_BASE_URL", name)
}

/// Load configuration from TOML file
pub fn load_config(path: &Path) -> Result<SaaswireConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: SaaswireConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}
