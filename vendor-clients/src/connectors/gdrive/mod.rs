pub mod api;
pub mod config;

use std::sync::Arc;

use async_trait::async_trait;
use saaswire::{
    ApiClient, AuthStrategy, CredentialSet, RequestDescriptor, Result, SaaswireConfig, Transport,
};

use crate::{ConnectionInfo, Connector};

use self::api::{AboutUser, FileEntry, FileInfo, FileList, FileResource};
use self::config::{
    file_path, parent_filter, ABOUT_PATH, BASE_URL, FILES_PATH, INFO_FIELDS, LIST_FIELDS,
    LIST_ORDER, NAME, SEARCH_FIELDS, SEARCH_PAGE_SIZE,
};

/// Google Drive v3 client: listing, search and file metadata.
///
/// Authenticates with an OAuth access token (`token` credential); obtaining
/// or refreshing that token is the caller's business.
#[derive(Clone, Debug)]
pub struct DriveClient {
    api: ApiClient,
}

impl DriveClient {
    /// Create a client against the real Drive API.
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

    /// Recently modified files first, optionally restricted to one folder.
    pub async fn list_files(&self, folder_id: Option<&str>, limit: u32) -> Result<Vec<FileEntry>> {
        let request = RequestDescriptor::get(FILES_PATH)
            .query("pageSize", limit)
            .query("fields", LIST_FIELDS)
            .query("orderBy", LIST_ORDER)
            .query_opt("q", folder_id.map(parent_filter));
        self.fetch_files(request).await
    }

    /// Search with a Drive query expression, passed through untouched
    /// (e.g. `name contains 'report'`).
    pub async fn search_files(&self, query: &str) -> Result<Vec<FileEntry>> {
        let request = RequestDescriptor::get(FILES_PATH)
            .query("q", query)
            .query("pageSize", SEARCH_PAGE_SIZE)
            .query("fields", SEARCH_FIELDS);
        self.fetch_files(request).await
    }

    /// Full metadata for one file.
    pub async fn get_file_info(&self, file_id: &str) -> Result<FileInfo> {
        let request = RequestDescriptor::get(file_path(file_id)).query("fields", INFO_FIELDS);
        let resource: FileResource = self.api.send(request).await?.decode()?;
        Ok(FileInfo::from(resource))
    }

    async fn fetch_files(&self, request: RequestDescriptor) -> Result<Vec<FileEntry>> {
        let list: FileList = self.api.send(request).await?.decode()?;
        Ok(list.files.iter().map(FileEntry::from).collect())
    }
}

#[async_trait]
impl Connector for DriveClient {
    fn name(&self) -> &str {
        NAME
    }

    async fn check_connection(&self) -> Result<ConnectionInfo> {
        let request = RequestDescriptor::get(ABOUT_PATH).query("fields", "user");
        let user: AboutUser = self.api.send(request).await?.decode_field("user")?;
        Ok(ConnectionInfo::new(NAME)
            .with("User", user.display_name.unwrap_or_else(|| "Unknown".to_string()))
            .with("Email", user.email_address.unwrap_or_else(|| "Unknown".to_string())))
    }
}
