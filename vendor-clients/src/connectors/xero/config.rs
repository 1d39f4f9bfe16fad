pub const NAME: &str = "xero";
pub const BASE_URL: &str = "https://api.xero.com/api.xro/2.0";

/// Header naming the organisation a request acts on.
pub const TENANT_HEADER: &str = "Xero-tenant-id";

pub const INVOICES_PATH: &str = "/Invoices";
pub const CONTACTS_PATH: &str = "/Contacts";
pub const ORGANISATION_PATH: &str = "/Organisation";

/// Only the first page is ever requested.
pub const FIRST_PAGE: u32 = 1;
