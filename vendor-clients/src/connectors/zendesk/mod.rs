pub mod api;
pub mod config;

use std::sync::Arc;

use async_trait::async_trait;
use saaswire::{
    ApiClient, AuthStrategy, CredentialSet, RequestDescriptor, Result, SaaswireConfig, Transport,
};
use serde_json::json;

use crate::{ConnectionInfo, Connector};

use self::api::{Ticket, TicketList, TicketObject, User};
use self::config::{
    base_url_from, status_query, ticket_path, CURRENT_USER_PATH, NAME, SEARCH_PATH, TICKETS_PATH,
};

/// Zendesk Support client: ticket listing, detail and public replies.
///
/// Authenticates with an agent email plus API token (`email`, `token`);
/// the `subdomain` credential selects the account.
#[derive(Clone, Debug)]
pub struct ZendeskClient {
    api: ApiClient,
}

impl ZendeskClient {
    /// Create a client for `https://<subdomain>.zendesk.com/api/v2`.
    pub fn new(credentials: CredentialSet, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = base_url_from(&credentials)?;
        Self::with_base_url(base_url, credentials, transport)
    }

    /// Create a client with a custom base URL (for testing with a mock server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        credentials: CredentialSet,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let auth = AuthStrategy::basic_token(credentials)?;
        Ok(Self {
            api: ApiClient::new(base_url, auth, transport),
        })
    }

    /// Create a client honouring any configured base URL override. Without
    /// an override the `subdomain` credential is required.
    pub fn from_config(
        credentials: CredentialSet,
        config: &SaaswireConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        match config.base_url(NAME) {
            Some(base_url) => Self::with_base_url(base_url, credentials, transport),
            None => Self::new(credentials, transport),
        }
    }

    /// List tickets. With a status the search endpoint is used
    /// (`type:ticket status:<status>`); without one, the plain listing in
    /// the vendor's default order.
    pub async fn list_tickets(&self, status: Option<&str>, limit: u32) -> Result<Vec<Ticket>> {
        let request = match status {
            Some(status) => RequestDescriptor::get(SEARCH_PATH)
                .query("query", status_query(status))
                .query("per_page", limit),
            None => RequestDescriptor::get(TICKETS_PATH).query("per_page", limit),
        };
        let list: TicketList = self.api.send(request).await?.decode()?;
        Ok(list.into_tickets().into_iter().map(Ticket::from).collect())
    }

    /// Full ticket detail, description untruncated.
    pub async fn get_ticket(&self, id: u64) -> Result<Ticket> {
        let response = self.api.send(RequestDescriptor::get(ticket_path(id))).await?;
        let ticket: TicketObject = response.decode_field("ticket")?;
        Ok(Ticket::from(ticket))
    }

    /// Add a public (customer-visible) comment to a ticket.
    pub async fn reply_to_ticket(&self, id: u64, message: &str) -> Result<()> {
        let request = RequestDescriptor::put(ticket_path(id)).json(json!({
            "ticket": {
                "comment": {
                    "body": message,
                    "public": true,
                }
            }
        }));
        self.api.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl Connector for ZendeskClient {
    fn name(&self) -> &str {
        NAME
    }

    async fn check_connection(&self) -> Result<ConnectionInfo> {
        let response = self.api.send(RequestDescriptor::get(CURRENT_USER_PATH)).await?;
        let user: User = response.decode_field("user")?;
        Ok(ConnectionInfo::new(NAME)
            .with("User", user.name.unwrap_or_else(|| "Unknown".to_string()))
            .with("Role", user.role.unwrap_or_else(|| "Unknown".to_string())))
    }
}
