//! Best-Offer Selector
//!
//! Fold over the offer catalog picking the largest discount.

use chrono::{DateTime, Utc};
use shared::models::{CartSnapshot, EvaluatedOffer, Offer};

use crate::calculator::calculate_offer_discount;

/// Find the offer yielding the largest discount for this cart.
///
/// Offers are evaluated in catalog order with a strict `>` comparison,
/// so the first offer wins an exact tie. `priority` is deliberately not
/// consulted; callers that want priority-ordered ties pre-sort the
/// catalog before calling. Returns `None` when every offer yields 0,
/// including the empty-catalog case.
pub fn find_best_offer(
    offers: &[Offer],
    cart: &CartSnapshot,
    now: DateTime<Utc>,
) -> Option<EvaluatedOffer> {
    let mut best: Option<EvaluatedOffer> = None;
    let mut best_discount = 0.0;

    for offer in offers {
        let discount = calculate_offer_discount(offer, cart, now);
        if discount > best_discount {
            best_discount = discount;
            best = Some(EvaluatedOffer::from_offer(offer, discount));
        }
    }

    if let Some(winner) = &best {
        tracing::debug!(
            offer_id = %winner.offer.id,
            discount = winner.calculated_discount,
            "auto-apply offer selected"
        );
    }

    best
}
