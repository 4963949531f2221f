//! Shared types for the promo engine
//!
//! Domain models exchanged between the evaluation engine and its callers:
//! the offer catalog feed, cart snapshots, and evaluation results.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{CartLineItem, CartSnapshot, DiscountModel, EvaluatedOffer, Offer, ProductRef};
