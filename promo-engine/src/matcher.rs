//! Offer Validity Filter
//!
//! Logic for deciding whether an offer is currently usable and which
//! cart lines it applies to.

use chrono::{DateTime, Utc};
use shared::models::{CartLineItem, CartSnapshot, Offer};

/// Check whether `now` falls inside the offer's validity window.
///
/// Bounds are inclusive. The window strings come straight from the
/// catalog feed; anything that fails to parse disqualifies the offer.
pub fn is_within_window(offer: &Offer, now: DateTime<Utc>) -> bool {
    if let (Ok(start), Ok(end)) = (
        DateTime::parse_from_rfc3339(&offer.start_date),
        DateTime::parse_from_rfc3339(&offer.end_date),
    ) {
        now >= start && now <= end
    } else {
        false
    }
}

/// Check whether an offer is usable at all for this cart.
///
/// Gates run in order and short-circuit on the first failure: validity
/// window, active flag, minimum purchase against the whole-cart total,
/// then the redemption cap when one is set.
pub fn is_offer_eligible(offer: &Offer, cart: &CartSnapshot, now: DateTime<Utc>) -> bool {
    if !is_within_window(offer, now) {
        return false;
    }
    if !offer.is_active {
        return false;
    }
    if cart.total < offer.min_purchase_amount {
        return false;
    }
    if let Some(limit) = offer.usage_limit
        && offer.used_count >= limit
    {
        return false;
    }
    true
}

/// Select the cart lines this offer's scoping matches.
///
/// An offer that applies to everything takes every line; otherwise the
/// product list is consulted first, then the category list. An offer
/// with neither list matches nothing, which is a zero-discount result
/// downstream, not an error.
pub fn applicable_items<'a>(offer: &Offer, items: &'a [CartLineItem]) -> Vec<&'a CartLineItem> {
    if offer.apply_to_all {
        return items.iter().collect();
    }

    if !offer.applicable_products.is_empty() {
        return items
            .iter()
            .filter(|item| {
                item.resolve_product_id()
                    .is_some_and(|id| offer.applicable_products.iter().any(|p| p == id))
            })
            .collect();
    }

    if !offer.applicable_categories.is_empty() {
        return items
            .iter()
            .filter(|item| {
                item.category
                    .as_deref()
                    .is_some_and(|c| offer.applicable_categories.iter().any(|a| a == c))
            })
            .collect();
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DiscountModel, ProductRef};

    fn make_offer() -> Offer {
        Offer {
            id: "test".to_string(),
            model: DiscountModel::Percentage { value: 10.0 },
            apply_to_all: true,
            applicable_products: vec![],
            applicable_categories: vec![],
            min_purchase_amount: 0.0,
            max_discount: None,
            code: None,
            usage_limit: None,
            used_count: 0,
            start_date: "2025-06-01T00:00:00Z".to_string(),
            end_date: "2025-06-30T23:59:59Z".to_string(),
            is_active: true,
            priority: 0,
        }
    }

    fn make_item(product_id: &str, category: &str, price: f64, quantity: u32) -> CartLineItem {
        CartLineItem {
            product_id: Some(product_id.to_string()),
            product: None,
            category: Some(category.to_string()),
            price,
            quantity,
        }
    }

    fn make_cart(total: f64) -> CartSnapshot {
        CartSnapshot::new(vec![make_item("p1", "shoes", total, 1)], total)
    }

    fn at(rfc3339: &str) -> DateTime<Utc> {
        rfc3339.parse().unwrap()
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let offer = make_offer();

        assert!(is_within_window(&offer, at("2025-06-01T00:00:00Z")));
        assert!(is_within_window(&offer, at("2025-06-30T23:59:59Z")));
        assert!(is_within_window(&offer, at("2025-06-15T12:00:00Z")));
    }

    #[test]
    fn test_outside_window_is_invalid() {
        let offer = make_offer();

        assert!(!is_within_window(&offer, at("2025-05-31T23:59:59Z")));
        assert!(!is_within_window(&offer, at("2025-07-01T00:00:00Z")));
    }

    #[test]
    fn test_unparseable_dates_disqualify() {
        let mut offer = make_offer();
        offer.start_date = "next tuesday".to_string();

        assert!(!is_within_window(&offer, at("2025-06-15T12:00:00Z")));
        assert!(!is_offer_eligible(
            &offer,
            &make_cart(100.0),
            at("2025-06-15T12:00:00Z")
        ));
    }

    #[test]
    fn test_inactive_offer_is_ineligible() {
        let mut offer = make_offer();
        offer.is_active = false;

        assert!(!is_offer_eligible(
            &offer,
            &make_cart(100.0),
            at("2025-06-15T12:00:00Z")
        ));
    }

    #[test]
    fn test_min_purchase_gate() {
        let mut offer = make_offer();
        offer.min_purchase_amount = 200.0;
        let now = at("2025-06-15T12:00:00Z");

        assert!(!is_offer_eligible(&offer, &make_cart(199.99), now));
        assert!(is_offer_eligible(&offer, &make_cart(200.0), now));
    }

    #[test]
    fn test_usage_limit_gate() {
        let mut offer = make_offer();
        offer.usage_limit = Some(100);
        let now = at("2025-06-15T12:00:00Z");

        offer.used_count = 99;
        assert!(is_offer_eligible(&offer, &make_cart(50.0), now));

        offer.used_count = 100;
        assert!(!is_offer_eligible(&offer, &make_cart(50.0), now));
    }

    #[test]
    fn test_no_usage_limit_means_unlimited() {
        let mut offer = make_offer();
        offer.used_count = 1_000_000;

        assert!(is_offer_eligible(
            &offer,
            &make_cart(50.0),
            at("2025-06-15T12:00:00Z")
        ));
    }

    #[test]
    fn test_apply_to_all_takes_every_line() {
        let offer = make_offer();
        let items = vec![
            make_item("p1", "shoes", 10.0, 1),
            make_item("p2", "bags", 20.0, 2),
        ];

        assert_eq!(applicable_items(&offer, &items).len(), 2);
    }

    #[test]
    fn test_product_scoping() {
        let mut offer = make_offer();
        offer.apply_to_all = false;
        offer.applicable_products = vec!["p2".to_string(), "p3".to_string()];
        let items = vec![
            make_item("p1", "shoes", 10.0, 1),
            make_item("p2", "bags", 20.0, 2),
        ];

        let matched = applicable_items(&offer, &items);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].resolve_product_id(), Some("p2"));
    }

    #[test]
    fn test_product_scoping_resolves_nested_shape() {
        let mut offer = make_offer();
        offer.apply_to_all = false;
        offer.applicable_products = vec!["p9".to_string()];
        let items = vec![CartLineItem {
            product_id: None,
            product: Some(ProductRef {
                id: "p9".to_string(),
            }),
            category: None,
            price: 15.0,
            quantity: 1,
        }];

        assert_eq!(applicable_items(&offer, &items).len(), 1);
    }

    #[test]
    fn test_category_scoping_only_when_product_list_empty() {
        let mut offer = make_offer();
        offer.apply_to_all = false;
        offer.applicable_products = vec!["p3".to_string()];
        offer.applicable_categories = vec!["shoes".to_string()];
        let items = vec![make_item("p1", "shoes", 10.0, 1)];

        // Product list is non-empty, so the category list is not consulted
        assert!(applicable_items(&offer, &items).is_empty());

        offer.applicable_products.clear();
        assert_eq!(applicable_items(&offer, &items).len(), 1);
    }

    #[test]
    fn test_no_scoping_matches_nothing() {
        let mut offer = make_offer();
        offer.apply_to_all = false;
        let items = vec![make_item("p1", "shoes", 10.0, 1)];

        assert!(applicable_items(&offer, &items).is_empty());
    }
}
