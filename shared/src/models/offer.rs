//! Promotional Offer Model

use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// Discount model enum, tagged on the `type` field of the catalog feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DiscountModel {
    /// Percentage off the applicable subtotal (value = percentage points)
    Percentage { value: f64 },
    /// Flat amount off, independent of cart size
    Fixed { value: f64 },
    /// Buy one get one free. Computed identically to [`DiscountModel::BuyXGetY`];
    /// kept as a distinct tag for display.
    Bogo {
        #[serde(default = "default_quantity")]
        buy_quantity: u32,
        #[serde(default = "default_quantity")]
        get_quantity: u32,
    },
    /// Every `buy_quantity` units earn `get_quantity` free units
    BuyXGetY {
        #[serde(default = "default_quantity")]
        buy_quantity: u32,
        #[serde(default = "default_quantity")]
        get_quantity: u32,
    },
    /// Shipping-fee waiver, applied at checkout rather than as a cart discount
    FreeShipping,
}

/// Promotional offer entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    /// Discount model (`type` plus its parameters, flat on the wire)
    #[serde(flatten)]
    pub model: DiscountModel,
    /// When true the offer covers the entire cart
    #[serde(default)]
    pub apply_to_all: bool,
    /// Product scoping, consulted only when `apply_to_all` is false
    #[serde(default)]
    pub applicable_products: Vec<String>,
    /// Category scoping, consulted only when `applicable_products` is empty
    #[serde(default)]
    pub applicable_categories: Vec<String>,
    /// Floor on the whole-cart total (0 = no floor)
    #[serde(default)]
    pub min_purchase_amount: f64,
    /// Cap on the computed discount; `None` = uncapped
    #[serde(default)]
    pub max_discount: Option<f64>,
    /// Coupon code for manual entry; offers without one are still
    /// auto-apply candidates
    #[serde(default)]
    pub code: Option<String>,
    /// Redemption cap; the offer is invalid once `used_count` reaches it
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    /// Validity window bounds (RFC3339); unparseable values disqualify
    /// the offer instead of erroring
    pub start_date: String,
    pub end_date: String,
    /// Kill-switch independent of the date window
    pub is_active: bool,
    /// Admin ordering hint; not consulted during selection
    #[serde(default)]
    pub priority: i32,
}
