use serde::Serialize;

/// Outcome of a successful connection check.
///
/// `details` holds label/value pairs in display order, e.g.
/// `("Shop", "Acme")`, `("Domain", "acme.com")`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConnectionInfo {
    /// Provider that was checked
    pub provider: String,

    /// What the vendor reported about the authenticated account
    pub details: Vec<(String, String)>,
}

impl ConnectionInfo {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            details: Vec::new(),
        }
    }

    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((label.into(), value.into()));
        self
    }

    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}
