use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::connectors::parse_timestamp;

/// Drive file resource (only the requested fields are present).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResource {
    pub id: String,
    pub name: Option<String>,
    pub mime_type: Option<String>,
    pub modified_time: Option<String>,
    /// Drive reports sizes as decimal strings; folders have none.
    pub size: Option<String>,
    #[serde(default)]
    pub owners: Vec<Owner>,
    pub web_view_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
}

/// `files.list` response.
#[derive(Debug, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<FileResource>,
}

/// `about.get` user.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUser {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
}

/// Normalized file listing entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileEntry {
    pub id: String,
    pub name: Option<String>,
    pub mime_type: String,
    pub modified_time: Option<DateTime<Utc>>,
    pub size_bytes: Option<u64>,
}

impl FileEntry {
    /// Folders (and shortcuts to them) carry a folder MIME type.
    pub fn is_folder(&self) -> bool {
        self.mime_type.contains("folder")
    }
}

impl From<&FileResource> for FileEntry {
    fn from(resource: &FileResource) -> Self {
        Self {
            id: resource.id.clone(),
            name: resource.name.clone(),
            mime_type: resource.mime_type.clone().unwrap_or_default(),
            modified_time: parse_timestamp(resource.modified_time.as_deref()),
            size_bytes: resource.size.as_deref().and_then(|s| s.parse().ok()),
        }
    }
}

/// Full metadata for one file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileInfo {
    pub entry: FileEntry,
    /// Display name of the first owner.
    pub owner_name: Option<String>,
    /// Share link, when the file has one.
    pub web_view_link: Option<String>,
}

impl From<FileResource> for FileInfo {
    fn from(resource: FileResource) -> Self {
        let entry = FileEntry::from(&resource);
        let owner_name = resource
            .owners
            .into_iter()
            .next()
            .and_then(|owner| owner.display_name);
        Self {
            entry,
            owner_name,
            web_view_link: resource.web_view_link,
        }
    }
}
