//! Conversion routines for each category kind
//!
//! Linear categories store factors as units-per-reference-unit, so a value
//! is divided by the source factor and multiplied by the target factor.
//! Temperature has no shared scale and uses an explicit pairwise table.

use std::fmt;

// ============ Linear factors ============

/// Units per meter
pub const LENGTH_FACTORS: [(&str, f64); 7] = [
    ("millimeters", 1000.0),
    ("centimeters", 100.0),
    ("meters", 1.0),
    ("kilometers", 0.001),
    ("inches", 39.3701),
    ("feet", 3.28084),
    ("miles", 0.000621371),
];

/// Units per kilogram
pub const WEIGHT_FACTORS: [(&str, f64); 4] = [
    ("grams", 1000.0),
    ("kilograms", 1.0),
    ("pounds", 2.20462),
    ("ounces", 35.274),
];

pub(crate) const LENGTH_UNITS: [&str; 7] = [
    LENGTH_FACTORS[0].0,
    LENGTH_FACTORS[1].0,
    LENGTH_FACTORS[2].0,
    LENGTH_FACTORS[3].0,
    LENGTH_FACTORS[4].0,
    LENGTH_FACTORS[5].0,
    LENGTH_FACTORS[6].0,
];

pub(crate) const WEIGHT_UNITS: [&str; 4] = [
    WEIGHT_FACTORS[0].0,
    WEIGHT_FACTORS[1].0,
    WEIGHT_FACTORS[2].0,
    WEIGHT_FACTORS[3].0,
];

/// Look up a unit's factor in a linear table
pub fn factor(table: &[(&str, f64)], unit: &str) -> Option<f64> {
    table.iter().find(|(name, _)| *name == unit).map(|(_, f)| *f)
}

/// Convert through the reference unit: `(value / from) * to`
pub fn convert_linear(value: f64, from: f64, to: f64) -> f64 {
    (value / from) * to
}

// ============ Temperature ============

/// Temperature scales, in selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

pub(crate) const TEMPERATURE_UNITS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Celsius => TEMPERATURE_UNITS[0],
            Self::Fahrenheit => TEMPERATURE_UNITS[1],
            Self::Kelvin => TEMPERATURE_UNITS[2],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.name() == name)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pairwise temperature conversion.
///
/// Celsius and Fahrenheit convert directly to each other; only conversions
/// involving Kelvin add or remove the 273.15 offset.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    if from == to {
        return value;
    }

    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, _) => value + 273.15,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, _) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, _) => (value - 273.15) * 9.0 / 5.0 + 32.0,
    }
}
