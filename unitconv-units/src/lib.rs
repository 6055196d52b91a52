//! Unitconv Units - Unit Conversion Engine
//!
//! Converts numeric values between units of the same category.
//!
//! Categories:
//! - Length (millimeters, centimeters, meters, kilometers, inches, feet, miles)
//! - Weight (grams, kilograms, pounds, ounces)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//!
//! ```
//! let feet = unitconv_units::convert("Length", "meters", "feet", 1.0).unwrap();
//! assert!((feet - 3.28084).abs() < 1e-9);
//! ```

mod category;
mod convert;
mod error;
mod registry;

pub use category::UnitCategory;
pub use convert::{
    convert_linear, convert_temperature, factor, TemperatureUnit, LENGTH_FACTORS, WEIGHT_FACTORS,
};
pub use error::{codes, ConversionError};
pub use registry::{convert, ConversionRegistry, REGISTRY};
