pub const NAME: &str = "gdrive";
pub const BASE_URL: &str = "https://www.googleapis.com/drive/v3";

pub const FILES_PATH: &str = "/files";
pub const ABOUT_PATH: &str = "/about";

/// Partial-response field masks.
pub const LIST_FIELDS: &str = "files(id,name,mimeType,modifiedTime,size)";
pub const SEARCH_FIELDS: &str = "files(id,name,mimeType,modifiedTime)";
pub const INFO_FIELDS: &str = "id,name,mimeType,modifiedTime,size,owners,webViewLink,permissions";

pub const LIST_ORDER: &str = "modifiedTime desc";

/// Page size for searches; listings take the caller's limit.
pub const SEARCH_PAGE_SIZE: u32 = 20;

/// `/files/<id>`
pub fn file_path(id: &str) -> String {
    format!("{}/{}", FILES_PATH, saaswire::request::path_segment(id))
}

/// Drive query restricting results to children of `folder_id`.
pub fn parent_filter(folder_id: &str) -> String {
    format!("'{}' in parents", folder_id)
}
