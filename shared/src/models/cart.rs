//! Cart Snapshot Models

use serde::{Deserialize, Serialize};

/// Nested product reference, one of the two line-item wire shapes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRef {
    #[serde(alias = "_id")]
    pub id: String,
}

/// One cart line as the storefront sends it.
///
/// Older cart payloads carry a direct `productId`; newer ones nest a
/// `product` object. Both shapes resolve through
/// [`CartLineItem::resolve_product_id`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Unit price
    pub price: f64,
    pub quantity: u32,
}

impl CartLineItem {
    /// Resolve the product ID regardless of which wire shape was sent.
    ///
    /// Scope matching goes through here so the rest of the engine stays
    /// type-uniform.
    pub fn resolve_product_id(&self) -> Option<&str> {
        self.product_id
            .as_deref()
            .or_else(|| self.product.as_ref().map(|p| p.id.as_str()))
    }

    /// price × quantity for this line
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Cart contents plus the whole-cart total
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    /// Sum of price × quantity across the entire cart, not just the
    /// lines an offer applies to. Used for the minimum-purchase gate.
    pub total: f64,
}

impl CartSnapshot {
    pub fn new(items: Vec<CartLineItem>, total: f64) -> Self {
        Self { items, total }
    }

    /// Build a snapshot with the total computed from the lines
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let total = items.iter().map(CartLineItem::line_total).sum();
        Self { items, total }
    }
}
