//! Category registry
//!
//! Process-wide, read-only, built once on first use.

use std::sync::LazyLock;

use crate::{ConversionError, UnitCategory};

/// Global category registry
pub static REGISTRY: LazyLock<ConversionRegistry> = LazyLock::new(ConversionRegistry::new);

/// Registry of unit categories, keyed by name, in display order
#[derive(Debug)]
pub struct ConversionRegistry {
    categories: Vec<UnitCategory>,
}

impl ConversionRegistry {
    pub fn new() -> Self {
        let mut registry = ConversionRegistry {
            categories: Vec::with_capacity(UnitCategory::ALL.len()),
        };
        registry.register(UnitCategory::Length);
        registry.register(UnitCategory::Weight);
        registry.register(UnitCategory::Temperature);
        registry
    }

    fn register(&mut self, category: UnitCategory) {
        debug_assert!(!self.categories.contains(&category), "duplicate category {}", category);
        self.categories.push(category);
    }

    /// Get a category by name
    pub fn get(&self, name: &str) -> Option<UnitCategory> {
        self.categories.iter().copied().find(|c| c.name() == name)
    }

    /// Get a category by name, failing with `UnknownCategory`
    pub fn category(&self, name: &str) -> Result<UnitCategory, ConversionError> {
        self.get(name).ok_or_else(|| {
            tracing::debug!(category = name, "rejected unknown category");
            ConversionError::unknown_category(name)
        })
    }

    /// Categories in display order
    pub fn categories(&self) -> impl Iterator<Item = UnitCategory> + '_ {
        self.categories.iter().copied()
    }

    /// Category names in display order
    pub fn names(&self) -> Vec<&'static str> {
        self.categories().map(|c| c.name()).collect()
    }

    /// Convert `value` between two units of the named category
    pub fn convert(&self, category: &str, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
        self.category(category)?.convert(value, from, to)
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert `value` using the global registry
pub fn convert(category: &str, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
    REGISTRY.convert(category, from, to, value)
}
