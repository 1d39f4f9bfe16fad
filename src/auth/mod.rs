//! Authentication strategies for outgoing requests.
//!
//! Each vendor authenticates one of four ways. A strategy is built from a
//! [`CredentialSet`] up front, so a missing secret is reported before any
//! request can be sent; afterwards [`AuthStrategy::apply`] is a pure function
//! producing the headers for one request.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::credentials::{CredentialSet, EMAIL, TENANT_ID, TOKEN};
use crate::error::Result;
use crate::request::RequestDescriptor;


/// Header name/value pairs to attach to one request.
pub type AuthHeaders = Vec<(String, String)>;

/// Separator between email and API token in Basic-token credentials.
pub const BASIC_TOKEN_SEPARATOR: &str = "/token:";

/// How a request proves who is calling.
#[derive(Clone, PartialEq)]
pub enum AuthStrategy {
    /// `Authorization: Bearer <token>`.
    BearerToken { token: String },
    /// `Authorization: Basic base64(<email>/token:<token>)`.
    BasicToken { email: String, token: String },
    /// A single vendor-specific header carrying the token.
    HeaderToken { header_name: String, token: String },
    /// Bearer token plus a second header naming the tenant.
    BearerWithTenant {
        token: String,
        tenant_header: String,
        tenant_id: String,
    },
}

impl AuthStrategy {
    /// Requires `token`.
    pub fn bearer(credentials: CredentialSet) -> Result<Self> {
        Ok(Self::BearerToken {
            token: credentials.require(TOKEN)?.to_string(),
        })
    }

    /// Requires `email` and `token`.
    pub fn basic_token(credentials: CredentialSet) -> Result<Self> {
        Ok(Self::BasicToken {
            email: credentials.require(EMAIL)?.to_string(),
            token: credentials.require(TOKEN)?.to_string(),
        })
    }

    /// Requires `token`; sent in `header_name`.
    pub fn header_token(header_name: impl Into<String>, credentials: CredentialSet) -> Result<Self> {
        Ok(Self::HeaderToken {
            header_name: header_name.into(),
            token: credentials.require(TOKEN)?.to_string(),
        })
    }

    /// Requires `token` and `tenant_id`; the tenant goes in `tenant_header`.
    pub fn bearer_with_tenant(
        tenant_header: impl Into<String>,
        credentials: CredentialSet,
    ) -> Result<Self> {
        Ok(Self::BearerWithTenant {
            token: credentials.require(TOKEN)?.to_string(),
            tenant_header: tenant_header.into(),
            tenant_id: credentials.require(TENANT_ID)?.to_string(),
        })
    }

    /// Short name of the scheme, safe to log.
    pub fn scheme(&self) -> &'static str {
        match self {
            AuthStrategy::BearerToken { .. } => "bearer",
            AuthStrategy::BasicToken { .. } => "basic-token",
            AuthStrategy::HeaderToken { .. } => "header-token",
            AuthStrategy::BearerWithTenant { .. } => "bearer-with-tenant",
        }
    }

    /// Headers authenticating `_request`. None of the current schemes sign
    /// the request, so the headers depend on the credentials only.
    pub fn apply(&self, _request: &RequestDescriptor) -> AuthHeaders {
        match self {
            AuthStrategy::BearerToken { token } => {
                vec![("Authorization".to_string(), bearer_value(token))]
            }
            AuthStrategy::BasicToken { email, token } => {
                vec![("Authorization".to_string(), basic_token_value(email, token))]
            }
            AuthStrategy::HeaderToken { header_name, token } => {
                vec![(header_name.clone(), token.clone())]
            }
            AuthStrategy::BearerWithTenant {
                token,
                tenant_header,
                tenant_id,
            } => vec![
                ("Authorization".to_string(), bearer_value(token)),
                (tenant_header.clone(), tenant_id.clone()),
            ],
        }
    }
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStrategy")
            .field("scheme", &self.scheme())
            .finish_non_exhaustive()
    }
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token)
}

/// `Basic <base64(email + "/token:" + token)>`, standard alphabet, padded.
pub fn basic_token_value(email: &str, token: &str) -> String {
    let raw = format!("{}{}{}", email, BASIC_TOKEN_SEPARATOR, token);
    format!("Basic {}", BASE64.encode(raw.as_bytes()))
}
