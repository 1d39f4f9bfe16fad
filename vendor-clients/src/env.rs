//! Credentials from environment variables.
//!
//! | Provider | Variables |
//! |----------|-----------|
//! | hubspot  | `HUBSPOT_API_KEY` |
//! | zendesk  | `ZENDESK_SUBDOMAIN`, `ZENDESK_EMAIL`, `ZENDESK_API_TOKEN` |
//! | gdrive   | `GOOGLE_DRIVE_TOKEN` |
//! | shopify  | `SHOPIFY_SHOP_NAME`, `SHOPIFY_ACCESS_TOKEN` |
//! | xero     | `XERO_ACCESS_TOKEN`, `XERO_TENANT_ID` |
//!
//! `ZENDESK_SUBDOMAIN` and `SHOPIFY_SHOP_NAME` only pick the base URL, so
//! they may be left unset when that provider's base URL is overridden.

use std::path::Path;

use anyhow::{bail, Result};
use saaswire::credentials::{EMAIL, SHOP, SUBDOMAIN, TENANT_ID, TOKEN};
use saaswire::{CredentialSet, SaaswireConfig};

use crate::Provider;

/// Environment variable and the credential key it fills.
pub type EnvBinding = (&'static str, &'static str);

/// Variables `provider` reads, in the order they are reported.
pub fn bindings(provider: Provider) -> &'static [EnvBinding] {
    match provider {
        Provider::HubSpot => &[("HUBSPOT_API_KEY", TOKEN)],
        Provider::Zendesk => &[
            ("ZENDESK_SUBDOMAIN", SUBDOMAIN),
            ("ZENDESK_EMAIL", EMAIL),
            ("ZENDESK_API_TOKEN", TOKEN),
        ],
        Provider::GoogleDrive => &[("GOOGLE_DRIVE_TOKEN", TOKEN)],
        Provider::Shopify => &[("SHOPIFY_SHOP_NAME", SHOP), ("SHOPIFY_ACCESS_TOKEN", TOKEN)],
        Provider::Xero => &[("XERO_ACCESS_TOKEN", TOKEN), ("XERO_TENANT_ID", TENANT_ID)],
    }
}

/// Credential keys that only select the base URL.
const ROUTING_KEYS: &[&str] = &[SUBDOMAIN, SHOP];

/// Load configuration, applying `SAASWIRE_<PROVIDER>_BASE_URL` for every
/// known provider.
pub fn load_config(path: Option<&Path>) -> Result<SaaswireConfig> {
    SaaswireConfig::load(path, &Provider::names())
}

/// Comma-separated variable names, for error messages.
pub fn variable_names(provider: Provider) -> String {
    bindings(provider)
        .iter()
        .map(|(var, _)| *var)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read `provider`'s credentials from the process environment.
pub fn credentials_from_env(provider: Provider, config: &SaaswireConfig) -> Result<CredentialSet> {
    credentials_from(provider, config, |var| std::env::var(var).ok())
}

/// Read `provider`'s credentials through `lookup`.
///
/// Fails listing every unset or empty variable. Empty values count as unset.
/// Routing variables are not required when `config` overrides the
/// provider's base URL.
pub fn credentials_from<F>(
    provider: Provider,
    config: &SaaswireConfig,
    lookup: F,
) -> Result<CredentialSet>
where
    F: Fn(&str) -> Option<String>,
{
    let has_base_url = config.base_url(provider.name()).is_some();
    let mut credentials = CredentialSet::new();
    let mut missing = Vec::new();
    for (var, key) in bindings(provider) {
        match lookup(var).filter(|v| !v.is_empty()) {
            Some(value) => credentials = credentials.with(*key, value),
            None if has_base_url && ROUTING_KEYS.contains(key) => {}
            None => missing.push(*var),
        }
    }
    if !missing.is_empty() {
        bail!(
            "{} environment variable{} not set",
            missing.join(", "),
            if missing.len() == 1 { "" } else { "s" }
        );
    }
    Ok(credentials)
}
