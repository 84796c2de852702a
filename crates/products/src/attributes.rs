use core::str::FromStr;

use serde::{Deserialize, Serialize};

use skuforge_core::{ValidationError, ValueObject};

/// Trim surrounding whitespace and upper-case.
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Product category (fixed vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Shoes,
    Bags,
    Clothing,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Shoes,
        Category::Bags,
        Category::Clothing,
        Category::Accessory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Shoes => "SHOES",
            Category::Bags => "BAGS",
            Category::Clothing => "CLOTHING",
            Category::Accessory => "ACCESSORY",
        }
    }

    pub fn allowed() -> [&'static str; 4] {
        Self::ALL.map(Self::as_str)
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses case- and whitespace-insensitively (`" shoes "` is `SHOES`).
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = normalize(s);
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| ValidationError::category(value, &Self::allowed()))
    }
}

/// Product color (fixed vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Blue,
    Black,
    White,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Black,
        Color::White,
        Color::Green,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Black => "BLACK",
            Color::White => "WHITE",
            Color::Green => "GREEN",
        }
    }

    pub fn allowed() -> [&'static str; 5] {
        Self::ALL.map(Self::as_str)
    }
}

impl ValueObject for Color {}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = normalize(s);
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| ValidationError::color(value, &Self::allowed()))
    }
}

/// Raw, unvalidated product attributes as supplied by the caller.
///
/// Deserializes from `{"brand", "category", "color", "size", "year", "customCode"}`;
/// `customCode` may be omitted or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributes {
    pub brand: String,
    pub category: String,
    pub color: String,
    pub size: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
}

impl ProductAttributes {
    pub fn new(
        brand: impl Into<String>,
        category: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            brand: brand.into(),
            category: category.into(),
            color: color.into(),
            size: size.into(),
            year,
            custom_code: None,
        }
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }
}
