//! Data models
//!
//! Shared between the engine and its callers. Wire shapes match the
//! storefront backend's JSON (camelCase fields, snake_case type tags).

pub mod cart;
pub mod evaluated;
pub mod offer;

// Re-exports
pub use cart::*;
pub use evaluated::*;
pub use offer::*;
