use serde::Serialize;

use skuforge_core::{ValidationError, ValidationResult};

use crate::attributes::{Category, Color, ProductAttributes, normalize};
use crate::sku::Sku;

/// A validated product.
///
/// Every textual field is trimmed and upper-cased, category and color belong
/// to their vocabularies, and the year lies within
/// `[MIN_YEAR, current_year]`. A `ProductRecord` that violates any of these
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    brand: String,
    category: Category,
    color: Color,
    size: String,
    year: i32,
    custom_code: Option<String>,
}

impl ProductRecord {
    pub const MIN_YEAR: i32 = 1900;

    /// Normalize and validate raw attributes.
    ///
    /// `current_year` is the inclusive upper bound for `year`; callers read the
    /// clock, this function never does. Fields are checked in the order
    /// category, color, year and the first failure is returned.
    pub fn new(attrs: &ProductAttributes, current_year: i32) -> ValidationResult<Self> {
        let category: Category = attrs.category.parse()?;
        let color: Color = attrs.color.parse()?;

        if !(Self::MIN_YEAR..=current_year).contains(&attrs.year) {
            return Err(ValidationError::year(attrs.year, current_year));
        }

        let custom_code = attrs
            .custom_code
            .as_deref()
            .map(normalize)
            .filter(|code| !code.is_empty());

        Ok(Self {
            brand: normalize(&attrs.brand),
            category,
            color,
            size: normalize(&attrs.size),
            year: attrs.year,
            custom_code,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn custom_code(&self) -> Option<&str> {
        self.custom_code.as_deref()
    }

    /// Base SKU before collision resolution.
    ///
    /// A custom code wins outright. Otherwise the SKU is
    /// `BRD-CA-CO-SIZE-YY`: brand cut (or `X`-padded) to 3 characters, the
    /// first 2 characters of category and color, size without spaces, and the
    /// two-digit year.
    pub fn derive_sku(&self) -> Sku {
        if let Some(code) = &self.custom_code {
            return Sku::new(code.clone());
        }

        let brand: String = self.brand.chars().take(3).collect();
        let sku = format!(
            "{:X<3}-{}-{}-{}-{:02}",
            brand,
            &self.category.as_str()[..2],
            &self.color.as_str()[..2],
            self.size.replace(' ', ""),
            self.year.rem_euclid(100),
        );

        Sku::new(sku.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_YEAR: i32 = 2025;

    fn nike() -> ProductAttributes {
        ProductAttributes::new("Nike", "Shoes", "Red", "M", 2025)
    }

    fn record(attrs: &ProductAttributes) -> ProductRecord {
        ProductRecord::new(attrs, CURRENT_YEAR).unwrap()
    }

    #[test]
    fn new_normalizes_text_fields() {
        let attrs = ProductAttributes::new("  adidas ", " clothing", "black ", " xl ", 2024)
            .with_custom_code("  abc-1 ");
        let product = record(&attrs);

        assert_eq!(product.brand(), "ADIDAS");
        assert_eq!(product.category(), Category::Clothing);
        assert_eq!(product.color(), Color::Black);
        assert_eq!(product.size(), "XL");
        assert_eq!(product.custom_code(), Some("ABC-1"));
    }

    #[test]
    fn blank_custom_code_is_treated_as_absent() {
        let product = record(&nike().with_custom_code("   "));
        assert_eq!(product.custom_code(), None);
        assert_eq!(product.derive_sku().as_str(), "NIK-SH-RE-M-25");
    }

    #[test]
    fn new_rejects_unknown_category() {
        let attrs = ProductAttributes::new("Nike", "Sandals", "Red", "M", 2025);
        let err = ProductRecord::new(&attrs, CURRENT_YEAR).unwrap_err();

        assert_eq!(err.field(), "category");
        let msg = err.to_string();
        assert!(msg.contains("category"));
        for name in ["SHOES", "BAGS", "CLOTHING", "ACCESSORY"] {
            assert!(msg.contains(name), "missing {name} in {msg}");
        }
    }

    #[test]
    fn new_rejects_unknown_color() {
        let attrs = ProductAttributes::new("Nike", "Shoes", "Purple", "M", 2025);
        match ProductRecord::new(&attrs, CURRENT_YEAR).unwrap_err() {
            ValidationError::InvalidColor { value, .. } => assert_eq!(value, "PURPLE"),
            other => panic!("Expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn category_is_checked_before_color_and_year() {
        let attrs = ProductAttributes::new("Nike", "Sandals", "Purple", "M", 1800);
        let err = ProductRecord::new(&attrs, CURRENT_YEAR).unwrap_err();
        assert_eq!(err.field(), "category");

        let attrs = ProductAttributes::new("Nike", "Shoes", "Purple", "M", 1800);
        let err = ProductRecord::new(&attrs, CURRENT_YEAR).unwrap_err();
        assert_eq!(err.field(), "color");
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let with_year = |year| ProductAttributes::new("Nike", "Shoes", "Red", "M", year);

        assert_eq!(
            ProductRecord::new(&with_year(1899), CURRENT_YEAR).unwrap_err(),
            ValidationError::year(1899, CURRENT_YEAR)
        );
        assert!(ProductRecord::new(&with_year(1900), CURRENT_YEAR).is_ok());
        assert!(ProductRecord::new(&with_year(CURRENT_YEAR), CURRENT_YEAR).is_ok());

        let err = ProductRecord::new(&with_year(CURRENT_YEAR + 1), CURRENT_YEAR).unwrap_err();
        assert_eq!(err.to_string(), "Invalid year: 2026");
    }

    #[test]
    fn derive_sku_composes_segments() {
        assert_eq!(record(&nike()).derive_sku().as_str(), "NIK-SH-RE-M-25");

        let attrs = ProductAttributes::new("Adidas", "Clothing", "Black", "L", 2024);
        assert_eq!(record(&attrs).derive_sku().as_str(), "ADI-CL-BL-L-24");

        let attrs = ProductAttributes::new("Puma", "Shoes", "Blue", "42", 2025);
        assert_eq!(record(&attrs).derive_sku().as_str(), "PUM-SH-BL-42-25");
    }

    #[test]
    fn derive_sku_pads_short_brand_with_x() {
        let attrs = ProductAttributes::new("H", "Bags", "White", "S", 1905);
        assert_eq!(record(&attrs).derive_sku().as_str(), "HXX-BA-WH-S-05");

        let attrs = ProductAttributes::new("", "Accessory", "Green", "S", 2000);
        assert_eq!(record(&attrs).derive_sku().as_str(), "XXX-AC-GR-S-00");
    }

    #[test]
    fn derive_sku_strips_spaces_from_size() {
        let attrs = ProductAttributes::new("Levis", "Clothing", "Blue", " 32 x 34 ", 2010);
        assert_eq!(record(&attrs).derive_sku().as_str(), "LEV-CL-BL-32X34-10");
    }

    #[test]
    fn custom_code_overrides_composition() {
        let attrs = ProductAttributes::new("Gucci", "Bags", "Green", "OneSize", 2023)
            .with_custom_code("gucci-bag-123");
        assert_eq!(record(&attrs).derive_sku().as_str(), "GUCCI-BAG-123");
    }

    #[test]
    fn invalid_record_is_rejected_even_with_custom_code() {
        let attrs = ProductAttributes::new("Gucci", "Hats", "Green", "OneSize", 2023)
            .with_custom_code("GUCCI-HAT-1");
        assert!(ProductRecord::new(&attrs, CURRENT_YEAR).is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn category_name() -> impl Strategy<Value = String> {
            prop::sample::select(Category::allowed().to_vec()).prop_map(|s| s.to_string())
        }

        fn color_name() -> impl Strategy<Value = String> {
            prop::sample::select(Color::allowed().to_vec()).prop_map(|s| s.to_string())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: derivation is a pure function of the normalized attributes.
            #[test]
            fn derive_sku_is_deterministic(
                brand in "[A-Za-z]{0,12}",
                category in category_name(),
                color in color_name(),
                size in "[A-Za-z0-9 ]{0,8}",
                year in 1900i32..=CURRENT_YEAR,
            ) {
                let attrs = ProductAttributes::new(brand, category, color, size, year);
                let first = record(&attrs).derive_sku();
                let second = record(&attrs).derive_sku();
                prop_assert_eq!(first, second);
            }

            /// Property: surrounding whitespace and case never change the outcome.
            #[test]
            fn whitespace_and_case_are_insignificant(
                brand in "[A-Za-z]{1,12}",
                category in category_name(),
                color in color_name(),
                size in "[A-Za-z0-9]{1,8}",
                year in 1900i32..=CURRENT_YEAR,
            ) {
                let plain = ProductAttributes::new(
                    brand.clone(), category.clone(), color.clone(), size.clone(), year,
                );
                let noisy = ProductAttributes::new(
                    format!("  {}", brand.to_lowercase()),
                    format!("{} ", category.to_lowercase()),
                    format!("\t{color}"),
                    format!(" {size} "),
                    year,
                );
                prop_assert_eq!(record(&plain).derive_sku(), record(&noisy).derive_sku());
            }

            /// Property: years outside the window are always rejected.
            #[test]
            fn out_of_range_years_are_rejected(
                year in prop_oneof![i32::MIN..1900i32, (CURRENT_YEAR + 1)..i32::MAX],
            ) {
                let attrs = ProductAttributes::new("Nike", "Shoes", "Red", "M", year);
                let err = ProductRecord::new(&attrs, CURRENT_YEAR).unwrap_err();
                prop_assert_eq!(err.field(), "year");
            }

            /// Property: generated SKUs always have five segments with a two-digit year.
            #[test]
            fn composed_sku_has_five_segments(
                brand in "[A-Za-z]{0,12}",
                category in category_name(),
                color in color_name(),
                size in "[A-Za-z0-9]{1,8}",
                year in 1900i32..=CURRENT_YEAR,
            ) {
                let attrs = ProductAttributes::new(brand, category, color, size, year);
                let sku = record(&attrs).derive_sku();
                let parts: Vec<&str> = sku.as_str().split('-').collect();
                prop_assert_eq!(parts.len(), 5);
                prop_assert_eq!(parts[0].chars().count(), 3);
                prop_assert_eq!(parts[4].len(), 2);
            }
        }
    }
}
