//! Promotional-Offer Evaluation Engine
//!
//! Pure evaluation of promotional offers against a cart snapshot. The
//! matcher decides whether an offer is usable and which cart lines it
//! covers, the calculator turns that into a monetary discount, and the
//! selector picks the single best offer to auto-apply. Coupon-code entry
//! reuses the same gates and reports typed rejection reasons.
//!
//! Every function takes the evaluation instant explicitly and performs
//! no I/O, so invocations are safe to run concurrently with no
//! coordination. The server-side validation endpoint runs this same
//! crate so client and server never disagree on a discount amount.

pub mod calculator;
pub mod coupon;
pub mod matcher;
pub mod selector;

pub use calculator::calculate_offer_discount;
pub use coupon::{CouponError, validate_coupon};
pub use matcher::{applicable_items, is_offer_eligible};
pub use selector::find_best_offer;
