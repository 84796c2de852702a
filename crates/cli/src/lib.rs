//! `skuforge` command-line front end.
//!
//! Loads product attributes (a JSON file or the built-in demo catalogue),
//! runs them through the SKU runner and renders one line per outcome.

pub mod app;
pub mod cli;
pub mod dto;
pub mod input;
