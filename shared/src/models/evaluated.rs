//! Evaluated Offer - an offer with its computed discount attached

use serde::{Deserialize, Serialize};

use super::offer::Offer;

/// Result of evaluating one offer against a cart.
///
/// Offer fields are flattened on the wire so the storefront banner sees
/// a single flat object with `calculatedDiscount` alongside the offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedOffer {
    #[serde(flatten)]
    pub offer: Offer,
    /// Discount in whole currency units
    pub calculated_discount: f64,
}

impl EvaluatedOffer {
    /// Attach a calculated discount to an offer
    pub fn from_offer(offer: &Offer, calculated_discount: f64) -> Self {
        Self {
            offer: offer.clone(),
            calculated_discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::offer::DiscountModel;

    fn make_offer() -> Offer {
        Offer {
            id: "welcome".to_string(),
            model: DiscountModel::Percentage { value: 10.0 },
            apply_to_all: true,
            applicable_products: vec![],
            applicable_categories: vec![],
            min_purchase_amount: 0.0,
            max_discount: None,
            code: Some("WELCOME10".to_string()),
            usage_limit: None,
            used_count: 0,
            start_date: "2025-01-01T00:00:00Z".to_string(),
            end_date: "2025-12-31T23:59:59Z".to_string(),
            is_active: true,
            priority: 0,
        }
    }

    #[test]
    fn test_from_offer_attaches_discount() {
        let offer = make_offer();
        let evaluated = EvaluatedOffer::from_offer(&offer, 42.0);

        assert_eq!(evaluated.offer, offer);
        assert_eq!(evaluated.calculated_discount, 42.0);
    }

    #[test]
    fn test_serializes_flat_for_the_banner() {
        let evaluated = EvaluatedOffer::from_offer(&make_offer(), 42.0);

        let value = serde_json::to_value(&evaluated).unwrap();

        assert_eq!(value["id"], "welcome");
        assert_eq!(value["type"], "percentage");
        assert_eq!(value["code"], "WELCOME10");
        assert_eq!(value["calculatedDiscount"], 42.0);
    }
}
