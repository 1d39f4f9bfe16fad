//! saaswire - provider-agnostic authenticated-request engine.
//!
//! One typed client core for SaaS REST APIs: pluggable auth strategies, a
//! single HTTP transport and a fixed error taxonomy. Vendor-specific resource
//! clients live in the `vendor-clients` crate and call through [`ApiClient`].
//!
//! ```text
//! Resource client ──RequestDescriptor──▶ ApiClient
//!                                          │ AuthStrategy::apply
//!                                          ▼
//!                                      Transport::execute ──▶ vendor API
//!                                          │
//!                     ApiResponse / EngineError ◀┘
//! ```

// Authentication strategies
pub mod auth;

// API client binding base URL, auth and transport
pub mod client;

// Engine configuration (TOML + env)
pub mod config;

// Named secrets
pub mod credentials;

// Error taxonomy
pub mod error;

// Request descriptors
pub mod request;

// HTTP transport
pub mod transport;

pub use auth::{AuthHeaders, AuthStrategy};
pub use client::ApiClient;
pub use config::SaaswireConfig;
pub use credentials::CredentialSet;
pub use error::{EngineError, Result};
pub use request::{Method, RequestDescriptor};
pub use transport::{ApiResponse, HttpTransport, Transport};
