//! Unit categories
//!
//! A category is a family of comparable units sharing one conversion scheme.
//! The three kinds are dispatched by `match`; each owns its unit list.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::convert::{
    convert_linear, convert_temperature, factor, TemperatureUnit, LENGTH_FACTORS, LENGTH_UNITS,
    TEMPERATURE_UNITS, WEIGHT_FACTORS, WEIGHT_UNITS,
};
use crate::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
}

impl UnitCategory {
    /// All categories in display order
    pub const ALL: [UnitCategory; 3] = [Self::Length, Self::Weight, Self::Temperature];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
        }
    }

    /// Unit names in selection order
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Self::Length => &LENGTH_UNITS,
            Self::Weight => &WEIGHT_UNITS,
            Self::Temperature => &TEMPERATURE_UNITS,
        }
    }

    /// Check if a unit name belongs to this category
    pub fn contains(&self, unit: &str) -> bool {
        self.units().iter().any(|u| *u == unit)
    }

    /// Default (from, to) selection: the first two declared units
    pub fn default_pair(&self) -> (&'static str, &'static str) {
        let units = self.units();
        (units[0], units[1])
    }

    /// Convert `value` from one unit of this category to another.
    ///
    /// Both units are checked before the value, so a bad unit name is
    /// reported even when the value is also bad.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let result = match self {
            Self::Length => self.convert_with(&LENGTH_FACTORS, value, from, to)?,
            Self::Weight => self.convert_with(&WEIGHT_FACTORS, value, from, to)?,
            Self::Temperature => {
                let from = self.temperature_unit(from)?;
                let to = self.temperature_unit(to)?;
                check_finite(value)?;
                convert_temperature(value, from, to)
            }
        };
        Ok(result)
    }

    fn convert_with(
        &self,
        table: &[(&str, f64)],
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<f64, ConversionError> {
        let from_factor = factor(table, from).ok_or_else(|| self.unknown_unit(from))?;
        let to_factor = factor(table, to).ok_or_else(|| self.unknown_unit(to))?;
        check_finite(value)?;

        // Dividing then multiplying by the same factor can drift by one ulp
        if from == to {
            return Ok(value);
        }
        Ok(convert_linear(value, from_factor, to_factor))
    }

    fn temperature_unit(&self, name: &str) -> Result<TemperatureUnit, ConversionError> {
        TemperatureUnit::from_name(name).ok_or_else(|| self.unknown_unit(name))
    }

    fn unknown_unit(&self, unit: &str) -> ConversionError {
        tracing::debug!(category = self.name(), unit, "rejected unknown unit");
        ConversionError::unknown_unit(*self, unit)
    }
}

fn check_finite(value: f64) -> Result<(), ConversionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConversionError::invalid_value(value))
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnitCategory {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ConversionError::unknown_category(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("Length".parse::<UnitCategory>(), Ok(UnitCategory::Length));
        assert_eq!("Temperature".parse::<UnitCategory>(), Ok(UnitCategory::Temperature));
        assert_eq!(
            "length".parse::<UnitCategory>(),
            Err(ConversionError::unknown_category("length"))
        );
    }

    #[test]
    fn test_units_order() {
        assert_eq!(
            UnitCategory::Length.units(),
            &["millimeters", "centimeters", "meters", "kilometers", "inches", "feet", "miles"]
        );
        assert_eq!(UnitCategory::Temperature.units(), &["Celsius", "Fahrenheit", "Kelvin"]);
    }

    #[test]
    fn test_default_pair() {
        assert_eq!(UnitCategory::Length.default_pair(), ("millimeters", "centimeters"));
        assert_eq!(UnitCategory::Weight.default_pair(), ("grams", "kilograms"));
        assert_eq!(UnitCategory::Temperature.default_pair(), ("Celsius", "Fahrenheit"));
    }

    #[test]
    fn test_contains() {
        assert!(UnitCategory::Weight.contains("ounces"));
        assert!(!UnitCategory::Weight.contains("meters"));
    }

    #[test]
    fn test_convert_length() {
        let feet = UnitCategory::Length.convert(1.0, "meters", "feet").unwrap();
        assert!((feet - 3.28084).abs() < 1e-9);
    }

    #[test]
    fn test_convert_weight() {
        let pounds = UnitCategory::Weight.convert(1.0, "kilograms", "pounds").unwrap();
        assert!((pounds - 2.20462).abs() < 1e-9);

        let kg = UnitCategory::Weight.convert(1000.0, "grams", "kilograms").unwrap();
        assert_eq!(kg, 1.0);
    }

    #[test]
    fn test_identity_is_exact() {
        for category in UnitCategory::ALL {
            for unit in category.units() {
                for value in [0.1, -7.3, 1e-12, 123456.789] {
                    assert_eq!(category.convert(value, unit, unit).unwrap(), value);
                }
            }
        }
    }

    #[test]
    fn test_unit_from_other_category() {
        let err = UnitCategory::Length.convert(1.0, "grams", "meters").unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit(UnitCategory::Length, "grams"));

        let err = UnitCategory::Temperature.convert(1.0, "Celsius", "Rankine").unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit(UnitCategory::Temperature, "Rankine"));
    }

    #[test]
    fn test_non_finite_value() {
        let err = UnitCategory::Length.convert(f64::INFINITY, "meters", "feet").unwrap_err();
        assert_eq!(err.code(), crate::codes::INVALID_VALUE);

        let err = UnitCategory::Temperature.convert(f64::NAN, "Celsius", "Celsius").unwrap_err();
        assert_eq!(err.code(), crate::codes::INVALID_VALUE);
    }

    #[test]
    fn test_unit_checked_before_value() {
        let err = UnitCategory::Weight.convert(f64::NAN, "stone", "grams").unwrap_err();
        assert_eq!(err.code(), crate::codes::UNKNOWN_UNIT);
    }
}
