use saaswire::credentials::{CredentialSet, SHOP};
use saaswire::Result;

pub const NAME: &str = "shopify";

/// Admin API version every path is pinned to.
pub const API_VERSION: &str = "2024-01";

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

pub const SHOP_PATH: &str = "/shop.json";
pub const PRODUCTS_PATH: &str = "/products.json";
pub const INVENTORY_LEVELS_PATH: &str = "/inventory_levels.json";
pub const SET_INVENTORY_LEVEL_PATH: &str = "/inventory_levels/set.json";
pub const LOCATIONS_PATH: &str = "/locations.json";

/// Page size for the two reads behind an inventory check.
pub const INVENTORY_PAGE_SIZE: u32 = 50;

/// Low-stock filter: levels above this are left out.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Severity tiers: below `CRITICAL_BELOW` is critical, below `WARNING_BELOW` a warning.
pub const CRITICAL_BELOW: i64 = 5;
pub const WARNING_BELOW: i64 = 20;

/// `https://<shop>.myshopify.com/admin/api/<version>`
pub fn base_url(shop: &str, api_version: &str) -> String {
    format!("https://{}.myshopify.com/admin/api/{}", shop, api_version)
}

/// Base URL derived from the `shop` credential.
pub fn base_url_from(credentials: &CredentialSet, api_version: &str) -> Result<String> {
    Ok(base_url(credentials.require(SHOP)?, api_version))
}

/// `/variants/<id>.json`
pub fn variant_path(variant_id: u64) -> String {
    format!("/variants/{}.json", variant_id)
}
