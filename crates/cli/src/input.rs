//! Input sources.

use std::fs;
use std::path::Path;

use anyhow::Context;
use skuforge_products::ProductAttributes;

/// The built-in demo catalogue, processed when no input file is given.
pub fn demo_catalogue() -> Vec<ProductAttributes> {
    vec![
        ProductAttributes::new("Nike", "Shoes", "Red", "M", 2025),
        ProductAttributes::new("Adidas", "Clothing", "Black", "L", 2024),
        ProductAttributes::new("Puma", "Shoes", "Blue", "42", 2025),
        ProductAttributes::new("Nike", "Shoes", "Red", "M", 2025),
        ProductAttributes::new("Gucci", "Bags", "Green", "OneSize", 2023)
            .with_custom_code("GUCCI-BAG-123"),
    ]
}

/// Read a JSON array of product attribute objects.
///
/// A malformed file fails the whole load; per-record validation happens later.
pub fn load(path: &Path) -> anyhow::Result<Vec<ProductAttributes>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse product list in {}", path.display()))
}
