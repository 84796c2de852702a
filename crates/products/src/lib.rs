//! Products domain module.
//!
//! Validation of raw product attributes and deterministic SKU derivation,
//! implemented as pure domain logic (no IO, no clock, no storage).

pub mod attributes;
pub mod product;
pub mod sku;

pub use attributes::{Category, Color, ProductAttributes};
pub use product::ProductRecord;
pub use sku::Sku;
