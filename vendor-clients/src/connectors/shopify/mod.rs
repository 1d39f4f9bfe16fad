pub mod api;
pub mod config;
pub mod inventory;

use std::sync::Arc;

use async_trait::async_trait;
use saaswire::{
    ApiClient, AuthStrategy, CredentialSet, EngineError, RequestDescriptor, Result,
    SaaswireConfig, Transport,
};
use serde_json::json;
use tracing::debug;

use crate::{ConnectionInfo, Connector};

use self::api::{
    InventoryLevelList, InventoryUpdate, LocationList, Product, ProductList, ShopObject,
    VariantObject,
};
use self::config::{
    base_url_from, variant_path, ACCESS_TOKEN_HEADER, API_VERSION, INVENTORY_LEVELS_PATH,
    INVENTORY_PAGE_SIZE, LOCATIONS_PATH, NAME, PRODUCTS_PATH, SET_INVENTORY_LEVEL_PATH, SHOP_PATH,
};
use self::inventory::{join_levels, InventoryLevel};

/// Shopify Admin REST client for products and inventory.
///
/// Authenticates with an Admin API access token sent in
/// `X-Shopify-Access-Token` (`token` credential); the `shop` credential
/// selects the store.
#[derive(Clone, Debug)]
pub struct ShopifyClient {
    api: ApiClient,
}

impl ShopifyClient {
    /// Create a client for `https://<shop>.myshopify.com/admin/api/2024-01`.
    pub fn new(credentials: CredentialSet, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = base_url_from(&credentials, API_VERSION)?;
        Self::with_base_url(base_url, credentials, transport)
    }

    /// Create a client with a custom base URL (for testing with a mock server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        credentials: CredentialSet,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let auth = AuthStrategy::header_token(ACCESS_TOKEN_HEADER, credentials)?;
        Ok(Self {
            api: ApiClient::new(base_url, auth, transport),
        })
    }

    /// Create a client honouring configured base URL / API version overrides.
    pub fn from_config(
        credentials: CredentialSet,
        config: &SaaswireConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let base_url = match config.base_url(NAME) {
            Some(base_url) => base_url.to_string(),
            None => base_url_from(&credentials, config.api_version(NAME).unwrap_or(API_VERSION))?,
        };
        Self::with_base_url(base_url, credentials, transport)
    }

    /// First `limit` products.
    pub async fn list_products(&self, limit: u32) -> Result<Vec<Product>> {
        let request = RequestDescriptor::get(PRODUCTS_PATH).query("limit", limit);
        let list: ProductList = self.api.send(request).await?.decode()?;
        Ok(list.products.into_iter().map(Product::from).collect())
    }

    /// Inventory levels joined with product title and SKU.
    ///
    /// Two reads, in order: levels, then products. Either failing fails the
    /// whole check. With `low_stock_only`, levels above 10 are left out.
    pub async fn check_inventory(&self, low_stock_only: bool) -> Result<Vec<InventoryLevel>> {
        let levels_request =
            RequestDescriptor::get(INVENTORY_LEVELS_PATH).query("limit", INVENTORY_PAGE_SIZE);
        let levels: InventoryLevelList = self.api.send(levels_request).await?.decode()?;

        let products_request =
            RequestDescriptor::get(PRODUCTS_PATH).query("limit", INVENTORY_PAGE_SIZE);
        let products: ProductList = self.api.send(products_request).await?.decode()?;

        Ok(join_levels(
            levels.inventory_levels,
            &products.products,
            low_stock_only,
        ))
    }

    /// Set the available quantity of a variant at the store's first location.
    ///
    /// Three calls in sequence: variant lookup, location lookup, set level.
    /// Only the last one writes, so a failure earlier leaves nothing to undo;
    /// there is no rollback if the write itself fails.
    pub async fn update_inventory(&self, variant_id: u64, quantity: i64) -> Result<InventoryUpdate> {
        let response = self.api.send(RequestDescriptor::get(variant_path(variant_id))).await?;
        let variant: VariantObject = response.decode_field("variant")?;
        let inventory_item_id = variant.inventory_item_id.ok_or_else(|| {
            EngineError::decode(
                response.body.to_string(),
                format!("variant {} has no inventory_item_id", variant_id),
            )
        })?;

        let response = self.api.send(RequestDescriptor::get(LOCATIONS_PATH)).await?;
        let locations: LocationList = response.decode()?;
        let location_id = locations
            .locations
            .first()
            .map(|location| location.id)
            .ok_or_else(|| EngineError::decode(response.body.to_string(), "store has no locations"))?;
        debug!(variant_id, inventory_item_id, location_id, "Resolved inventory target");

        let request = RequestDescriptor::post(SET_INVENTORY_LEVEL_PATH).json(json!({
            "location_id": location_id,
            "inventory_item_id": inventory_item_id,
            "available": quantity,
        }));
        self.api.send(request).await?;

        Ok(InventoryUpdate {
            variant_id,
            inventory_item_id,
            location_id,
            available: quantity,
        })
    }
}

#[async_trait]
impl Connector for ShopifyClient {
    fn name(&self) -> &str {
        NAME
    }

    async fn check_connection(&self) -> Result<ConnectionInfo> {
        let shop: ShopObject = self
            .api
            .send(RequestDescriptor::get(SHOP_PATH))
            .await?
            .decode_field("shop")?;
        Ok(ConnectionInfo::new(NAME)
            .with("Shop", shop.name.unwrap_or_else(|| "Unknown".to_string()))
            .with("Domain", shop.domain.unwrap_or_else(|| "Unknown".to_string())))
    }
}
