pub mod api;
pub mod config;

use std::sync::Arc;

use async_trait::async_trait;
use saaswire::{
    ApiClient, AuthStrategy, CredentialSet, RequestDescriptor, Result, SaaswireConfig, Transport,
};

use crate::{ConnectionInfo, Connector};

use self::api::{AccountingContact, ContactList, Invoice, InvoiceList, OrganisationList};
use self::config::{
    BASE_URL, CONTACTS_PATH, FIRST_PAGE, INVOICES_PATH, NAME, ORGANISATION_PATH, TENANT_HEADER,
};

/// Xero Accounting client for invoices and contacts.
///
/// Authenticates with an OAuth access token plus the organisation's tenant
/// id (`token`, `tenant_id`). Lists read the first page only.
#[derive(Clone, Debug)]
pub struct XeroClient {
    api: ApiClient,
}

impl XeroClient {
    pub fn new(credentials: CredentialSet, transport: Arc<dyn Transport>) -> Result<Self> {
        Self::with_base_url(BASE_URL, credentials, transport)
    }

    /// Create a client with a custom base URL (for testing with a mock server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        credentials: CredentialSet,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let auth = AuthStrategy::bearer_with_tenant(TENANT_HEADER, credentials)?;
        Ok(Self {
            api: ApiClient::new(base_url, auth, transport),
        })
    }

    pub fn from_config(
        credentials: CredentialSet,
        config: &SaaswireConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let base_url = config.base_url(NAME).unwrap_or(BASE_URL).to_string();
        Self::with_base_url(base_url, credentials, transport)
    }

    /// Invoices on page 1.
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let request = RequestDescriptor::get(INVOICES_PATH).query("page", FIRST_PAGE);
        let list: InvoiceList = self.api.send(request).await?.decode()?;
        Ok(list.invoices.into_iter().map(Invoice::from).collect())
    }

    /// Contacts on page 1.
    pub async fn list_contacts(&self) -> Result<Vec<AccountingContact>> {
        let request = RequestDescriptor::get(CONTACTS_PATH).query("page", FIRST_PAGE);
        let list: ContactList = self.api.send(request).await?.decode()?;
        Ok(list.contacts.into_iter().map(AccountingContact::from).collect())
    }
}

#[async_trait]
impl Connector for XeroClient {
    fn name(&self) -> &str {
        NAME
    }

    async fn check_connection(&self) -> Result<ConnectionInfo> {
        let list: OrganisationList = self
            .api
            .send(RequestDescriptor::get(ORGANISATION_PATH))
            .await?
            .decode()?;
        let org = list.organisations.into_iter().next().unwrap_or_default();
        Ok(ConnectionInfo::new(NAME)
            .with("Organisation", org.name.unwrap_or_else(|| "Unknown".to_string()))
            .with("Country", org.country_code.unwrap_or_else(|| "Unknown".to_string())))
    }
}
