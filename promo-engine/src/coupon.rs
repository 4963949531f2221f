//! Coupon Code Validation
//!
//! Re-validates one user-entered code with the same gates as the
//! validity filter, reporting why a code was refused. The server-side
//! validation endpoint runs this exact logic, so client and server
//! always report the same first failure.

use chrono::{DateTime, Utc};
use shared::models::{CartSnapshot, EvaluatedOffer, Offer};
use thiserror::Error;

use crate::calculator::calculate_offer_discount;
use crate::matcher::{applicable_items, is_within_window};

/// Reasons a coupon code is refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CouponError {
    #[error("coupon code not found")]
    NotFound,
    #[error("offer is outside its validity window")]
    OutsideWindow,
    #[error("offer is not active")]
    Inactive,
    #[error("cart total {total} is below the minimum purchase of {required}")]
    MinPurchaseNotMet { required: f64, total: f64 },
    #[error("offer usage limit reached")]
    UsageLimitReached,
    #[error("offer does not apply to any item in the cart")]
    NotApplicable,
}

/// Validate a user-entered coupon code against the catalog.
///
/// Lookup is ASCII case-insensitive. Gates run in the same order as
/// [`crate::matcher::is_offer_eligible`], so the reported reason is the
/// first gate that failed. A free-shipping coupon with at least one
/// applicable line validates at discount 0.
pub fn validate_coupon(
    code: &str,
    offers: &[Offer],
    cart: &CartSnapshot,
    now: DateTime<Utc>,
) -> Result<EvaluatedOffer, CouponError> {
    let result = validate(code, offers, cart, now);

    if let Err(err) = &result {
        tracing::debug!(code, error = %err, "coupon rejected");
    }

    result
}

fn validate(
    code: &str,
    offers: &[Offer],
    cart: &CartSnapshot,
    now: DateTime<Utc>,
) -> Result<EvaluatedOffer, CouponError> {
    let offer = offers
        .iter()
        .find(|o| {
            o.code
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(code))
        })
        .ok_or(CouponError::NotFound)?;

    if !is_within_window(offer, now) {
        return Err(CouponError::OutsideWindow);
    }
    if !offer.is_active {
        return Err(CouponError::Inactive);
    }
    if cart.total < offer.min_purchase_amount {
        return Err(CouponError::MinPurchaseNotMet {
            required: offer.min_purchase_amount,
            total: cart.total,
        });
    }
    if let Some(limit) = offer.usage_limit
        && offer.used_count >= limit
    {
        return Err(CouponError::UsageLimitReached);
    }
    if applicable_items(offer, &cart.items).is_empty() {
        return Err(CouponError::NotApplicable);
    }

    let discount = calculate_offer_discount(offer, cart, now);
    Ok(EvaluatedOffer::from_offer(offer, discount))
}
