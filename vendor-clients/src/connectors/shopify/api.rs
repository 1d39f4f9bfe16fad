use serde::{Deserialize, Serialize};

/// Product variant as embedded in a product.
#[derive(Debug, Deserialize)]
pub struct VariantObject {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub sku: Option<String>,
    pub inventory_item_id: Option<u64>,
}

/// Admin API product.
#[derive(Debug, Deserialize)]
pub struct ProductObject {
    pub id: u64,
    pub title: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantObject>,
}

#[derive(Debug, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<ProductObject>,
}

/// Stock of one inventory item at one location.
#[derive(Debug, Deserialize)]
pub struct InventoryLevelObject {
    pub inventory_item_id: u64,
    pub location_id: Option<u64>,
    pub available: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct InventoryLevelList {
    #[serde(default)]
    pub inventory_levels: Vec<InventoryLevelObject>,
}

#[derive(Debug, Deserialize)]
pub struct LocationObject {
    pub id: u64,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationList {
    #[serde(default)]
    pub locations: Vec<LocationObject>,
}

/// Store details for the connection check.
#[derive(Debug, Default, Deserialize)]
pub struct ShopObject {
    pub name: Option<String>,
    pub domain: Option<String>,
}

/// Normalized product.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Product {
    pub id: u64,
    pub title: Option<String>,
    pub variant_count: usize,
    /// `"unknown"` when the API omits it.
    pub status: String,
}

impl From<ProductObject> for Product {
    fn from(object: ProductObject) -> Self {
        Self {
            id: object.id,
            title: object.title,
            variant_count: object.variants.len(),
            status: object.status.unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

/// Result of setting a variant's stock.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InventoryUpdate {
    pub variant_id: u64,
    pub inventory_item_id: u64,
    pub location_id: u64,
    pub available: i64,
}
