//! Joins inventory levels with the products that own them.

use std::collections::HashMap;

use serde::Serialize;

use super::api::{InventoryLevelObject, ProductObject};
use super::config::{CRITICAL_BELOW, LOW_STOCK_THRESHOLD, WARNING_BELOW};

/// Stock tier of one inventory level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockSeverity {
    /// Fewer than 5 available.
    Critical,
    /// Fewer than 20 available.
    Warning,
    Normal,
}

impl StockSeverity {
    pub fn for_quantity(available: i64) -> Self {
        if available < CRITICAL_BELOW {
            StockSeverity::Critical
        } else if available < WARNING_BELOW {
            StockSeverity::Warning
        } else {
            StockSeverity::Normal
        }
    }
}

/// Inventory level annotated with its product and variant.
///
/// `sku` and titles are `None` when no fetched product owns the item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InventoryLevel {
    pub inventory_item_id: u64,
    pub sku: Option<String>,
    pub product_title: Option<String>,
    pub variant_title: Option<String>,
    pub available: i64,
    pub severity: StockSeverity,
}

struct VariantInfo<'a> {
    product_title: Option<&'a str>,
    variant_title: Option<&'a str>,
    sku: Option<&'a str>,
}

/// Attach product context to each level, keeping level order.
///
/// With `low_stock_only`, levels above the low-stock threshold are dropped.
/// The lookup map lives only for this call.
pub fn join_levels(
    levels: Vec<InventoryLevelObject>,
    products: &[ProductObject],
    low_stock_only: bool,
) -> Vec<InventoryLevel> {
    let mut variants: HashMap<u64, VariantInfo<'_>> = HashMap::new();
    for product in products {
        for variant in &product.variants {
            if let Some(item_id) = variant.inventory_item_id {
                variants.insert(
                    item_id,
                    VariantInfo {
                        product_title: product.title.as_deref(),
                        variant_title: variant.title.as_deref(),
                        sku: variant.sku.as_deref(),
                    },
                );
            }
        }
    }

    levels
        .into_iter()
        .filter_map(|level| {
            let available = level.available.unwrap_or(0);
            if low_stock_only && available > LOW_STOCK_THRESHOLD {
                return None;
            }
            let info = variants.get(&level.inventory_item_id);
            Some(InventoryLevel {
                inventory_item_id: level.inventory_item_id,
                sku: info.and_then(|i| i.sku).map(str::to_string),
                product_title: info.and_then(|i| i.product_title).map(str::to_string),
                variant_title: info.and_then(|i| i.variant_title).map(str::to_string),
                available,
                severity: StockSeverity::for_quantity(available),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn levels() -> Vec<InventoryLevelObject> {
        serde_json::from_value(json!([
            {"inventory_item_id": 1, "available": 3},
            {"inventory_item_id": 2, "available": 15},
            {"inventory_item_id": 3, "available": 25},
            {"inventory_item_id": 4, "available": 8}
        ]))
        .unwrap()
    }

    fn products() -> Vec<ProductObject> {
        serde_json::from_value(json!([
            {"id": 100, "title": "T-Shirt", "variants": [
                {"id": 11, "title": "Small", "sku": "TS-S", "inventory_item_id": 1},
                {"id": 12, "title": "Large", "sku": "TS-L", "inventory_item_id": 2}
            ]},
            {"id": 200, "title": "Mug", "variants": [
                {"id": 21, "title": "Default Title", "sku": "MUG", "inventory_item_id": 3}
            ]},
            {"id": 300, "title": "Cap", "variants": [
                {"id": 31, "title": "One Size", "sku": "CAP", "inventory_item_id": 4}
            ]}
        ]))
        .unwrap()
    }

    #[test]
    fn test_severity_tiers() {
        assert_eq!(StockSeverity::for_quantity(0), StockSeverity::Critical);
        assert_eq!(StockSeverity::for_quantity(4), StockSeverity::Critical);
        assert_eq!(StockSeverity::for_quantity(5), StockSeverity::Warning);
        assert_eq!(StockSeverity::for_quantity(19), StockSeverity::Warning);
        assert_eq!(StockSeverity::for_quantity(20), StockSeverity::Normal);
        assert_eq!(StockSeverity::for_quantity(-2), StockSeverity::Critical);
    }

    #[test]
    fn test_low_stock_only_excludes_above_threshold() {
        let joined = join_levels(levels(), &products(), true);

        let skus: Vec<_> = joined.iter().map(|level| level.sku.as_deref()).collect();
        assert_eq!(skus, vec![Some("TS-S"), Some("CAP")]);
        assert_eq!(joined[0].available, 3);
        assert_eq!(joined[0].severity, StockSeverity::Critical);
        assert_eq!(joined[1].available, 8);
        assert_eq!(joined[1].severity, StockSeverity::Warning);
    }

    #[test]
    fn test_warning_tier_above_threshold_is_filtered() {
        let levels: Vec<InventoryLevelObject> =
            serde_json::from_value(json!([{"inventory_item_id": 2, "available": 15}])).unwrap();

        assert!(join_levels(levels, &products(), true).is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let levels: Vec<InventoryLevelObject> =
            serde_json::from_value(json!([{"inventory_item_id": 1, "available": 10}])).unwrap();
        assert_eq!(join_levels(levels, &products(), true).len(), 1);
    }

    #[test]
    fn test_all_levels_without_filter() {
        let joined = join_levels(levels(), &products(), false);

        assert_eq!(joined.len(), 4);
        assert_eq!(joined[2].product_title.as_deref(), Some("Mug"));
        assert_eq!(joined[2].severity, StockSeverity::Normal);
    }

    #[test]
    fn test_unmatched_item_and_missing_quantity() {
        let levels: Vec<InventoryLevelObject> =
            serde_json::from_value(json!([{"inventory_item_id": 999, "available": null}])).unwrap();
        let joined = join_levels(levels, &products(), false);

        assert_eq!(joined[0].available, 0);
        assert_eq!(joined[0].sku, None);
        assert_eq!(joined[0].product_title, None);
        assert_eq!(joined[0].severity, StockSeverity::Critical);
    }
}
