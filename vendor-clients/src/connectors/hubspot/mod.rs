pub mod api;
pub mod config;

use std::sync::Arc;

use async_trait::async_trait;
use saaswire::{
    ApiClient, AuthStrategy, CredentialSet, EngineError, RequestDescriptor, Result,
    SaaswireConfig, Transport,
};
use serde_json::json;

use crate::{ConnectionInfo, Connector};

use self::api::{search_body, Contact, ContactObject, Deal, DealObject, Page};
use self::config::{
    BASE_URL, CONTACTS_PATH, CONTACTS_SEARCH_PATH, CONTACT_PROPERTIES, DEALS_PATH,
    DEAL_PROPERTIES, DEFAULT_DEAL_STAGE, NAME,
};

/// HubSpot CRM client for contacts and deals over the v3 objects API.
///
/// Authenticates with a private-app bearer token (`token` credential).
#[derive(Clone, Debug)]
pub struct HubSpotClient {
    api: ApiClient,
}

impl HubSpotClient {
    /// Create a client against the real HubSpot API.
    pub fn new(credentials: CredentialSet, transport: Arc<dyn Transport>) -> Result<Self> {
        Self::with_base_url(BASE_URL, credentials, transport)
    }

    /// Create a client with a custom base URL (for testing with a mock server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        credentials: CredentialSet,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let auth = AuthStrategy::bearer(credentials)?;
        Ok(Self {
            api: ApiClient::new(base_url, auth, transport),
        })
    }

    /// Create a client honouring any configured base URL override.
    pub fn from_config(
        credentials: CredentialSet,
        config: &SaaswireConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let base_url = config.base_url(NAME).unwrap_or(BASE_URL).to_string();
        Self::with_base_url(base_url, credentials, transport)
    }

    /// Most recent contacts, `limit` at most.
    pub async fn list_contacts(&self, limit: u32) -> Result<Vec<Contact>> {
        let request = RequestDescriptor::get(CONTACTS_PATH)
            .query("limit", limit)
            .query("properties", CONTACT_PROPERTIES.join(","));
        let page: Page<ContactObject> = self.api.send(request).await?.decode()?;
        Ok(page.results.into_iter().map(Contact::from).collect())
    }

    /// Search contacts with a `key:value key:value` query (see
    /// [`api::parse_search_query`] for the token rules).
    pub async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>> {
        let request = RequestDescriptor::post(CONTACTS_SEARCH_PATH).json(search_body(query));
        let page: Page<ContactObject> = self.api.send(request).await?.decode()?;
        Ok(page.results.into_iter().map(Contact::from).collect())
    }

    /// Create a contact. `email` must be non-empty; the other fields may be.
    pub async fn create_contact(&self, email: &str, first_name: &str, company: &str) -> Result<Contact> {
        if email.trim().is_empty() {
            return Err(EngineError::configuration("contact email is required"));
        }
        let request = RequestDescriptor::post(CONTACTS_PATH).json(json!({
            "properties": {
                "email": email,
                "firstname": first_name,
                "company": company,
            }
        }));
        let created: ContactObject = self.api.send(request).await?.decode()?;
        Ok(Contact::from(created))
    }

    /// Most recent deals, `limit` at most.
    pub async fn list_deals(&self, limit: u32) -> Result<Vec<Deal>> {
        let request = RequestDescriptor::get(DEALS_PATH)
            .query("limit", limit)
            .query("properties", DEAL_PROPERTIES.join(","));
        let page: Page<DealObject> = self.api.send(request).await?.decode()?;
        Ok(page.results.into_iter().map(Deal::from).collect())
    }

    /// Create a deal. Without a stage it lands in `appointmentscheduled`.
    pub async fn create_deal(&self, name: &str, amount: &str, stage: Option<&str>) -> Result<Deal> {
        let request = RequestDescriptor::post(DEALS_PATH).json(json!({
            "properties": {
                "dealname": name,
                "amount": amount,
                "dealstage": stage.unwrap_or(DEFAULT_DEAL_STAGE),
            }
        }));
        let created: DealObject = self.api.send(request).await?.decode()?;
        Ok(Deal::from(created))
    }
}

#[async_trait]
impl Connector for HubSpotClient {
    fn name(&self) -> &str {
        NAME
    }

    async fn check_connection(&self) -> Result<ConnectionInfo> {
        let request = RequestDescriptor::get(CONTACTS_PATH).query("limit", 1);
        let page: Page<ContactObject> = self.api.send(request).await?.decode()?;
        Ok(ConnectionInfo::new(NAME).with("Total contacts", page.total.unwrap_or(0).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use mockito::{Matcher, Server};
    use saaswire::credentials::TOKEN;
    use saaswire::HttpTransport;

    fn credentials() -> CredentialSet {
        CredentialSet::new().with(TOKEN, "pat-test")
    }

    fn client(server: &Server) -> HubSpotClient {
        let transport = Arc::new(HttpTransport::new("test").unwrap());
        HubSpotClient::with_base_url(server.url(), credentials(), transport).unwrap()
    }

    #[test]
    fn test_missing_token_fails_before_any_call() {
        let stub = StubTransport::new();
        let result = HubSpotClient::new(CredentialSet::new(), stub.clone());
        assert!(matches!(result, Err(EngineError::Configuration(_))));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_list_contacts() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/crm/v3/objects/contacts")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "5".into()),
                Matcher::UrlEncoded(
                    "properties".into(),
                    "email,firstname,lastname,company".into(),
                ),
            ]))
            .match_header("authorization", "Bearer pat-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "results": [
                        {"id": "101", "properties": {"email": "jane@acme.com", "firstname": "Jane", "lastname": "Doe", "company": "Acme"}},
                        {"id": "102", "properties": {"email": "bob@example.com"}}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let contacts = client(&server).list_contacts(5).await.unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id, "101");
        assert_eq!(contacts[0].first_name, "Jane");
        assert_eq!(contacts[0].company, "Acme");
        assert_eq!(contacts[1].first_name, "");
        assert_eq!(contacts[1].last_name, "");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_contacts_builds_single_filter_group() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/crm/v3/objects/contacts/search")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "filterGroups": [{
                    "filters": [
                        {"propertyName": "email", "operator": "CONTAINS_TOKEN", "value": "john@example.com"},
                        {"propertyName": "company", "operator": "CONTAINS_TOKEN", "value": "Acme"}
                    ]
                }],
                "properties": ["email", "firstname", "lastname", "company"]
            })))
            .with_status(200)
            .with_body(r#"{"total": 1, "results": [{"id": "7", "properties": {"email": "john@example.com"}}]}"#)
            .create_async()
            .await;

        let contacts = client(&server)
            .search_contacts("email:john@example.com company:Acme")
            .await
            .unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].email, "john@example.com");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_contact_defaults_optional_fields() {
        let stub = StubTransport::new();
        stub.respond(json!({"id": "555", "properties": {"email": "new@acme.com"}}));
        let client = HubSpotClient::new(credentials(), stub.clone()).unwrap();

        let contact = client.create_contact("new@acme.com", "", "").await.unwrap();

        assert_eq!(contact.id, "555");
        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].base_url, "https://api.hubapi.com");
        assert_eq!(calls[0].request.path(), "/crm/v3/objects/contacts");
        assert_eq!(
            calls[0].request.body(),
            Some(&json!({"properties": {"email": "new@acme.com", "firstname": "", "company": ""}}))
        );
    }

    #[tokio::test]
    async fn test_create_contact_requires_email() {
        let stub = StubTransport::new();
        let client = HubSpotClient::new(credentials(), stub.clone()).unwrap();

        let err = client.create_contact("  ", "Jane", "Acme").await.unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_list_deals() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/crm/v3/objects/deals")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "10".into()),
                Matcher::UrlEncoded(
                    "properties".into(),
                    "dealname,amount,dealstage,closedate".into(),
                ),
            ]))
            .with_status(200)
            .with_body(
                r#"{"results": [
                    {"id": "1", "properties": {"dealname": "Renewal", "amount": "1200", "dealstage": "closedwon"}},
                    {"id": "2", "properties": {"dealname": null, "amount": null}}
                ]}"#,
            )
            .create_async()
            .await;

        let deals = client(&server).list_deals(10).await.unwrap();

        assert_eq!(deals.len(), 2);
        assert_eq!(deals[0].amount, "1200");
        assert_eq!(deals[0].stage.as_deref(), Some("closedwon"));
        assert_eq!(deals[1].amount, "0");
        assert_eq!(deals[1].name, None);
    }

    #[tokio::test]
    async fn test_create_deal_default_stage() {
        let stub = StubTransport::new();
        stub.respond(json!({"id": "77", "properties": {"dealname": "Pilot", "amount": "500", "dealstage": "appointmentscheduled"}}));
        let client = HubSpotClient::new(credentials(), stub.clone()).unwrap();

        let deal = client.create_deal("Pilot", "500", None).await.unwrap();

        assert_eq!(deal.stage.as_deref(), Some("appointmentscheduled"));
        let body = stub.calls()[0].request.body().cloned().unwrap();
        assert_eq!(body["properties"]["dealstage"], "appointmentscheduled");
        assert_eq!(body["properties"]["amount"], "500");
    }

    #[tokio::test]
    async fn test_http_error_propagates_unchanged() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/crm/v3/objects/deals")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"status":"error","message":"Authentication credentials not found."}"#)
            .create_async()
            .await;

        let err = client(&server).list_deals(10).await.unwrap_err();
        match err {
            EngineError::HttpStatus { code, body } => {
                assert_eq!(code, 401);
                assert!(body.contains("Authentication credentials not found"));
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_connection_reports_total() {
        let stub = StubTransport::new();
        stub.respond(json!({"total": 1342, "results": [{"id": "1", "properties": {}}]}));
        let client = HubSpotClient::new(credentials(), stub.clone()).unwrap();

        let info = client.check_connection().await.unwrap();

        assert_eq!(client.name(), "hubspot");
        assert_eq!(info.detail("Total contacts"), Some("1342"));
        assert_eq!(stub.calls()[0].request.query_pairs(), &[("limit".to_string(), "1".to_string())]);
    }
}
