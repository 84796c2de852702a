//! `skuforge-core` — domain building blocks shared by the SKU crates.
//!
//! Pure domain primitives only (no IO, no clocks).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{ValidationError, ValidationResult};
pub use id::RunId;
pub use value_object::ValueObject;
