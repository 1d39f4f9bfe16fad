//! Executes one request descriptor over HTTP.
//!
//! [`Transport`] is the seam between request construction and the network.
//! [`HttpTransport`] is the reqwest-backed implementation; tests substitute a
//! recording stub.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::request::RequestDescriptor;


/// User agent sent when no configuration overrides it.
pub const DEFAULT_USER_AGENT: &str = concat!("saaswire/", env!("CARGO_PKG_VERSION"));

const JSON: &str = "application/json";

/// Decoded 2xx response.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Deserialize the body into `T`; a shape mismatch is a decode error.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.body).map_err(|e| EngineError::decode(self.body.to_string(), e.to_string()))
    }

    /// Deserialize the value under `key`, failing if it is absent.
    pub fn decode_field<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.body.get(key).ok_or_else(|| {
            EngineError::decode(self.body.to_string(), format!("missing field `{}`", key))
        })?;
        T::deserialize(value).map_err(|e| EngineError::decode(self.body.to_string(), e.to_string()))
    }
}

/// Sends exactly one request per call. No retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` against `base_url` with the given headers.
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - 2xx with a JSON (or empty) body
    /// * `Err(EngineError::HttpStatus)` - non-2xx, raw body preserved
    /// * `Err(EngineError::Decode)` - 2xx with malformed JSON
    /// * `Err(EngineError::Network)` - the exchange itself failed
    async fn execute(
        &self,
        base_url: &str,
        request: RequestDescriptor,
        headers: &[(String, String)],
    ) -> Result<ApiResponse>;
}

/// reqwest-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Build a transport sending `user_agent`. Platform default timeouts.
    pub fn new(user_agent: &str) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| EngineError::configuration(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http_client })
    }

    /// Wrap an already configured client.
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        base_url: &str,
        request: RequestDescriptor,
        headers: &[(String, String)],
    ) -> Result<ApiResponse> {
        let url = request.url(base_url)?;
        let body = request.body_bytes()?;

        let mut builder = self
            .http_client
            .request(request.method().into(), &url)
            .header(ACCEPT, JSON);
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, JSON).body(body);
        }

        debug!(method = %request.method(), path = %request.path(), "Sending request");
        let response = builder.send().await.map_err(EngineError::from_reqwest)?;
        let status = response.status();
        debug!(method = %request.method(), path = %request.path(), status = status.as_u16(), "Response received");

        if !status.is_success() {
            // Best effort: an unreadable error body is reported as empty.
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::HttpStatus {
                code: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(EngineError::from_reqwest)?;
        decode_body(status.as_u16(), &bytes)
    }
}

/// Decode a 2xx body. Empty bodies decode to `null`.
pub fn decode_body(status: u16, bytes: &[u8]) -> Result<ApiResponse> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ApiResponse::new(status, Value::Null));
    }
    serde_json::from_slice(bytes)
        .map(|body| ApiResponse::new(status, body))
        .map_err(|e| EngineError::decode(String::from_utf8_lossy(bytes), e.to_string()))
}
