//! Vendor resource clients built on the saaswire request engine.
//!
//! Each vendor module composes [`RequestDescriptor`](saaswire::RequestDescriptor)s
//! for that vendor's REST surface, sends them through an
//! [`ApiClient`](saaswire::ApiClient) and maps the JSON into plain record types.
//!
//! # Architecture
//!
//! ```text
//!   CLI (main.rs)      env.rs ──▶ CredentialSet
//!        │                          │
//!        ▼                          ▼
//! ┌─────────────────────────────────────────┐
//! │  Resource client (HubSpot, Zendesk, …)   │
//! │  - build request descriptors             │
//! │  - map JSON into records                 │
//! └─────────────────────────────────────────┘
//!        │
//!        ▼
//!   saaswire::ApiClient ──▶ AuthStrategy + Transport
//! ```
//!
//! # Clients
//!
//! - [`HubSpotClient`] - CRM contacts and deals (bearer token)
//! - [`ZendeskClient`] - helpdesk tickets (basic token)
//! - [`DriveClient`] - Google Drive files (bearer token)
//! - [`ShopifyClient`] - products and inventory (header token)
//! - [`XeroClient`] - invoices and contacts (bearer token + tenant)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use saaswire::credentials::{CredentialSet, TOKEN};
//! use saaswire::HttpTransport;
//! use vendor_clients::HubSpotClient;
//!
//! # async fn run() -> saaswire::Result<()> {
//! let transport = Arc::new(HttpTransport::new("my-app/1.0")?);
//! let client = HubSpotClient::new(CredentialSet::new().with(TOKEN, "pat-..."), transport)?;
//! for contact in client.list_contacts(10).await? {
//!     println!("{} <{}>", contact.first_name, contact.email);
//! }
//! # Ok(())
//! # }
//! ```

mod connector;
mod types;
pub mod connectors;
pub mod env;
pub mod registry;

#[cfg(test)]
mod testing;

pub use connector::Connector;
pub use connectors::gdrive::DriveClient;
pub use connectors::hubspot::HubSpotClient;
pub use connectors::shopify::ShopifyClient;
pub use connectors::xero::XeroClient;
pub use connectors::zendesk::ZendeskClient;
pub use registry::Provider;
pub use types::ConnectionInfo;
