//! Domain error model.

use thiserror::Error;

/// Result type used by record construction.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A product attribute failed validation.
///
/// Each variant names the offending field. Enumerated fields carry the
/// allowed vocabulary in their message so a rejection is self-explanatory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid category: {value}. Allowed: {allowed}")]
    InvalidCategory { value: String, allowed: String },

    #[error("Invalid color: {value}. Allowed: {allowed}")]
    InvalidColor { value: String, allowed: String },

    /// `max` is the injected current year at validation time.
    #[error("Invalid year: {year}")]
    InvalidYear { year: i32, max: i32 },
}

impl ValidationError {
    pub fn category(value: impl Into<String>, allowed: &[&str]) -> Self {
        Self::InvalidCategory {
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    pub fn color(value: impl Into<String>, allowed: &[&str]) -> Self {
        Self::InvalidColor {
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    pub fn year(year: i32, max: i32) -> Self {
        Self::InvalidYear { year, max }
    }

    /// Name of the attribute that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidCategory { .. } => "category",
            ValidationError::InvalidColor { .. } => "color",
            ValidationError::InvalidYear { .. } => "year",
        }
    }
}
