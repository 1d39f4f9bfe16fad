//! Named secrets handed to an auth strategy at client construction.
//!
//! A [`CredentialSet`] is built once (usually from the environment by the
//! caller) and then moved into the client that uses it. Values are never
//! printed: `Debug` shows key names only.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{EngineError, Result};

/// API token, access token or API key.
pub const TOKEN: &str = "token";
/// Account email (Basic-token auth).
pub const EMAIL: &str = "email";
/// Tenant / organisation identifier.
pub const TENANT_ID: &str = "tenant_id";
/// Account subdomain used to derive a base URL.
pub const SUBDOMAIN: &str = "subdomain";
/// Shop name used to derive a base URL.
pub const SHOP: &str = "shop";

/// Immutable bag of named secrets.
///
/// Empty values are treated as absent, so `FOO=""` in the environment is the
/// same as not setting `FOO`.
#[derive(Clone, Default)]
pub struct CredentialSet {
    values: BTreeMap<String, String>,
}

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Empty values are dropped.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.values.insert(key.into(), value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value for `key` or a configuration error naming it.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| EngineError::configuration(format!("missing credential '{}'", key)))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CredentialSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, (key, value)| set.with(key, value))
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_absent() {
        let creds = CredentialSet::new().with(TOKEN, "").with(EMAIL, "a@b.c");
        assert!(!creds.contains(TOKEN));
        assert_eq!(creds.get(EMAIL), Some("a@b.c"));
    }

    #[test]
    fn test_require_names_missing_key() {
        let creds = CredentialSet::new();
        let err = creds.require(TENANT_ID).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
        assert!(err.to_string().contains("tenant_id"));
    }

    #[test]
    fn test_debug_never_prints_values() {
        let creds: CredentialSet = [(TOKEN, "super-secret-token"), (SHOP, "acme")]
            .into_iter()
            .collect();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("token"));
        assert!(debug.contains("shop"));
        assert!(!debug.contains("super-secret-token"));
        assert!(!debug.contains("acme"));
    }
}
