use std::sync::Arc;

use tracing::debug;

use crate::auth::AuthStrategy;
use crate::error::Result;
use crate::request::RequestDescriptor;
use crate::transport::{ApiResponse, Transport};

/// One vendor endpoint: base URL, auth strategy and the transport to send on.
///
/// Holds no per-call state; every [`send`](ApiClient::send) is independent.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth: AuthStrategy,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Trailing slashes on `base_url` are dropped so `base_url + path` never
    /// produces `//`.
    pub fn new(base_url: impl Into<String>, auth: AuthStrategy, transport: Arc<dyn Transport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            auth,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> &AuthStrategy {
        &self.auth
    }

    /// Authenticate and send one request.
    pub async fn send(&self, request: RequestDescriptor) -> Result<ApiResponse> {
        let headers = self.auth.apply(&request);
        debug!(scheme = self.auth.scheme(), method = %request.method(), path = %request.path(), "Dispatching");
        self.transport.execute(&self.base_url, request, &headers).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialSet, TOKEN};
    use mockito::Server;

    #[tokio::test]
    async fn test_send_applies_auth_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/shop.json")
            .match_header("x-shopify-access-token", "shpat_1")
            .with_status(200)
            .with_body(r#"{"shop": {"name": "Acme"}}"#)
            .create_async()
            .await;

        let auth = AuthStrategy::header_token(
            "X-Shopify-Access-Token",
            CredentialSet::new().with(TOKEN, "shpat_1"),
        )
        .unwrap();
        let transport = Arc::new(crate::transport::HttpTransport::new("test").unwrap());
        let client = ApiClient::new(format!("{}/", server.url()), auth, transport);

        let response = client.send(RequestDescriptor::get("/shop.json")).await.unwrap();
        assert_eq!(response.body["shop"]["name"], "Acme");
        assert!(!client.base_url().ends_with('/'));
        mock.assert_async().await;
    }
}
