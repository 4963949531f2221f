//! Discount Calculator
//!
//! Per-model discount math over the applicable cart lines.
//! Uses rust_decimal for precise calculations, reports f64.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use shared::models::{CartLineItem, CartSnapshot, DiscountModel, Offer};

use crate::matcher::{applicable_items, is_offer_eligible};

/// Discounts are reported in whole currency units (half-up)
const DECIMAL_PLACES: u32 = 0;

/// Convert f64 to Decimal for calculation (NaN degrades to zero)
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to whole units
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Raw discount for one model over the applicable lines.
///
/// No clamping or rounding happens here; the caller applies the
/// `max_discount` cap and rounds once at the end.
fn model_discount(model: &DiscountModel, items: &[&CartLineItem]) -> Decimal {
    let applicable_total: Decimal = items
        .iter()
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum();

    match model {
        DiscountModel::Percentage { value } => {
            applicable_total * to_decimal(*value) / Decimal::ONE_HUNDRED
        }
        // Flat amount even when it exceeds the applicable total; capping,
        // if any, happens via max_discount
        DiscountModel::Fixed { value } => to_decimal(*value),
        DiscountModel::Bogo {
            buy_quantity,
            get_quantity,
        }
        | DiscountModel::BuyXGetY {
            buy_quantity,
            get_quantity,
        } => {
            let total_qty: u32 = items.iter().map(|item| item.quantity).sum();
            if total_qty == 0 {
                return Decimal::ZERO;
            }
            // 0 on the wire gets the documented default of 1
            let sets = total_qty / (*buy_quantity).max(1);
            let free_items = Decimal::from(sets * get_quantity);
            let avg_unit_price = applicable_total / Decimal::from(total_qty);
            free_items * avg_unit_price
        }
        // Shipping-fee waiver is applied at checkout, never as a cart
        // discount
        DiscountModel::FreeShipping => Decimal::ZERO,
    }
}

/// Calculate the discount an offer yields against a cart at `now`.
///
/// Ineligible offers, empty applicable sets, and malformed numeric
/// values all degrade to 0; this function never errors.
pub fn calculate_offer_discount(offer: &Offer, cart: &CartSnapshot, now: DateTime<Utc>) -> f64 {
    if !is_offer_eligible(offer, cart, now) {
        return 0.0;
    }

    let items = applicable_items(offer, &cart.items);
    if items.is_empty() {
        return 0.0;
    }

    let mut discount = model_discount(&offer.model, &items);

    if let Some(cap) = offer.max_discount {
        discount = discount.min(to_decimal(cap));
    }

    // Negative values degrade to zero rather than erroring
    to_f64(discount.max(Decimal::ZERO))
}
