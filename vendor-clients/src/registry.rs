//! Provider registry - maps provider names to resource clients.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use saaswire::{CredentialSet, EngineError, Result, SaaswireConfig, Transport};

use crate::{Connector, DriveClient, HubSpotClient, ShopifyClient, XeroClient, ZendeskClient};

/// Vendors with a resource client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    HubSpot,
    Zendesk,
    GoogleDrive,
    Shopify,
    Xero,
}

impl Provider {
    /// Name used in configuration sections and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::HubSpot => crate::connectors::hubspot::config::NAME,
            Provider::Zendesk => crate::connectors::zendesk::config::NAME,
            Provider::GoogleDrive => crate::connectors::gdrive::config::NAME,
            Provider::Shopify => crate::connectors::shopify::config::NAME,
            Provider::Xero => crate::connectors::xero::config::NAME,
        }
    }

    /// Human-readable vendor name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::HubSpot => "HubSpot",
            Provider::Zendesk => "Zendesk",
            Provider::GoogleDrive => "Google Drive",
            Provider::Shopify => "Shopify",
            Provider::Xero => "Xero",
        }
    }

    pub fn all() -> &'static [Provider] {
        &[
            Provider::HubSpot,
            Provider::Zendesk,
            Provider::GoogleDrive,
            Provider::Shopify,
            Provider::Xero,
        ]
    }

    /// Names of every provider, in [`Provider::all`] order.
    pub fn names() -> Vec<&'static str> {
        Provider::all().iter().map(Provider::name).collect()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Provider::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::configuration(format!("unknown provider '{}'", s)))
    }
}

/// Build the client for `provider` as a [`Connector`].
///
/// Credential problems surface here, before any request is made.
pub fn connector_for(
    provider: Provider,
    credentials: CredentialSet,
    config: &SaaswireConfig,
    transport: Arc<dyn Transport>,
) -> Result<Arc<dyn Connector>> {
    let connector: Arc<dyn Connector> = match provider {
        Provider::HubSpot => Arc::new(HubSpotClient::from_config(credentials, config, transport)?),
        Provider::Zendesk => Arc::new(ZendeskClient::from_config(credentials, config, transport)?),
        Provider::GoogleDrive => Arc::new(DriveClient::from_config(credentials, config, transport)?),
        Provider::Shopify => Arc::new(ShopifyClient::from_config(credentials, config, transport)?),
        Provider::Xero => Arc::new(XeroClient::from_config(credentials, config, transport)?),
    };
    Ok(connector)
}
