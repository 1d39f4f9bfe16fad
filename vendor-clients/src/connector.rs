use async_trait::async_trait;
use saaswire::Result;

use crate::types::ConnectionInfo;

/// Common surface of every vendor client.
///
/// Clients are stateless between calls: credentials are fixed at
/// construction and nothing from one call is kept for the next.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use saaswire::credentials::{CredentialSet, TOKEN};
/// use saaswire::HttpTransport;
/// use vendor_clients::{Connector, DriveClient};
///
/// # async fn run() -> saaswire::Result<()> {
/// let transport = Arc::new(HttpTransport::new("my-app/1.0")?);
/// let drive = DriveClient::new(CredentialSet::new().with(TOKEN, "ya29..."), transport)?;
/// let info = drive.check_connection().await?;
/// println!("{}: {:?}", drive.name(), info.details);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Connector: Send + Sync {
    /// Returns the provider identifier.
    ///
    /// Lowercase alphanumeric (e.g. "hubspot", "gdrive"). Used for CLI
    /// subcommands, config sections and logging.
    fn name(&self) -> &str;

    /// Makes the cheapest authenticated call the vendor offers and reports
    /// who the credentials belong to.
    ///
    /// # Returns
    /// * `Ok(ConnectionInfo)` - the credentials work
    /// * `Err(EngineError)` - classified failure, unchanged from the transport
    async fn check_connection(&self) -> Result<ConnectionInfo>;
}
