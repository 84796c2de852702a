//! SKU allocation.
//!
//! `SkuRegistry` tracks every SKU issued during a run and resolves collisions;
//! `Runner` drives validation, derivation and allocation over an ordered
//! input sequence.

pub mod registry;
pub mod runner;

pub use registry::SkuRegistry;
pub use runner::{Outcome, RunSummary, Runner};
