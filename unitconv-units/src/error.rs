//! Conversion errors
//!
//! Every failure is local to a single `convert` call. Errors carry a
//! machine-readable code and a suggestion listing the valid names.

use serde::Serialize;
use thiserror::Error;

use crate::{UnitCategory, REGISTRY};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversionError {
    /// Input value is NaN or infinite
    #[error("invalid value: {value} is not a finite number")]
    InvalidValue { value: f64 },

    /// Category name is not registered
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    /// Unit name is not a member of the category
    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: UnitCategory, unit: String },
}

impl ConversionError {
    pub fn invalid_value(value: f64) -> Self {
        Self::InvalidValue { value }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory { name: name.into() }
    }

    pub fn unknown_unit(category: UnitCategory, unit: impl Into<String>) -> Self {
        Self::UnknownUnit { category, unit: unit.into() }
    }

    /// Machine-readable code, one of [`codes`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => codes::INVALID_VALUE,
            Self::UnknownCategory { .. } => codes::UNKNOWN_CATEGORY,
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
        }
    }

    /// Hint for fixing the call
    pub fn suggestion(&self) -> String {
        match self {
            Self::InvalidValue { .. } => "Provide a finite number".to_string(),
            Self::UnknownCategory { .. } => {
                format!("Valid categories: {}", REGISTRY.names().join(", "))
            }
            Self::UnknownUnit { category, .. } => {
                format!("Valid {} units: {}", category, category.units().join(", "))
            }
        }
    }
}
