//! Unitconv Form - headless unit converter form
//!
//! Holds what the user has selected and typed, validates the input,
//! calls the conversion engine and renders the result.

mod input;
mod render;

pub use input::parse_input;
pub use render::{Renderer, DECIMAL_PLACES, INVALID_NUMBER};

use serde::Serialize;
use unitconv_units::{ConversionError, UnitCategory, REGISTRY};

/// Form state: category, unit selection, raw input and last result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterForm {
    category: UnitCategory,
    from_unit: &'static str,
    to_unit: &'static str,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
}

impl ConverterForm {
    /// Length, meters to feet, nothing typed yet
    pub fn new() -> Self {
        Self {
            category: UnitCategory::Length,
            from_unit: "meters",
            to_unit: "feet",
            input: String::new(),
            result: None,
        }
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    pub fn from_unit(&self) -> &'static str {
        self.from_unit
    }

    pub fn to_unit(&self) -> &'static str {
        self.to_unit
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last rendered result, if the form has been submitted
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Units offered by the current category
    pub fn units(&self) -> &'static [&'static str] {
        self.category.units()
    }

    /// Switch category and reset the selection to its first two units
    pub fn select_category(&mut self, name: &str) -> Result<(), ConversionError> {
        let category = REGISTRY.category(name)?;
        let (from, to) = category.default_pair();
        self.category = category;
        self.from_unit = from;
        self.to_unit = to;
        tracing::debug!(category = name, from, to, "category selected");
        Ok(())
    }

    pub fn select_from(&mut self, unit: &str) -> Result<(), ConversionError> {
        self.from_unit = self.lookup_unit(unit)?;
        Ok(())
    }

    pub fn select_to(&mut self, unit: &str) -> Result<(), ConversionError> {
        self.to_unit = self.lookup_unit(unit)?;
        Ok(())
    }

    /// Store the raw value text; nothing is converted until [`submit`](Self::submit)
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Validate the input, convert it and store the rendered result.
    ///
    /// Text that is not a number yields [`INVALID_NUMBER`] without calling
    /// the engine.
    pub fn submit(&mut self) -> &str {
        let renderer = Renderer::new();
        let text = match parse_input(&self.input) {
            None => {
                tracing::debug!(input = %self.input, "input is not a valid number");
                INVALID_NUMBER.to_string()
            }
            Some(value) => match self.category.convert(value, self.from_unit, self.to_unit) {
                Ok(converted) => renderer.render_result(converted, self.to_unit),
                Err(e) => {
                    tracing::warn!(error = %e, "conversion failed");
                    e.to_string()
                }
            },
        };
        self.result.insert(text).as_str()
    }

    /// The `Result: ...` line, once there is a result to show
    pub fn display(&self) -> Option<String> {
        self.result()
            .map(|result| Renderer::new().render_display(result))
    }

    fn lookup_unit(&self, unit: &str) -> Result<&'static str, ConversionError> {
        self.category
            .units()
            .iter()
            .copied()
            .find(|u| *u == unit)
            .ok_or_else(|| ConversionError::unknown_unit(self.category, unit))
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit_with(form: &mut ConverterForm, input: &str) -> String {
        form.set_input(input);
        form.submit().to_string()
    }

    #[test]
    fn test_initial_state() {
        let form = ConverterForm::new();
        assert_eq!(form.category(), UnitCategory::Length);
        assert_eq!(form.from_unit(), "meters");
        assert_eq!(form.to_unit(), "feet");
        assert_eq!(form.input(), "");
        assert_eq!(form.result(), None);
        assert_eq!(form.display(), None);
    }

    #[test]
    fn test_meters_to_feet() {
        let mut form = ConverterForm::new();
        assert_eq!(submit_with(&mut form, "1"), "3.2808 feet");
        assert_eq!(form.display().as_deref(), Some("Result: 3.2808 feet"));
    }

    #[test]
    fn test_empty_input() {
        let mut form = ConverterForm::new();
        assert_eq!(submit_with(&mut form, ""), INVALID_NUMBER);
        assert_eq!(form.result(), Some("Please enter a valid number"));
    }

    #[test]
    fn test_non_numeric_input() {
        let mut form = ConverterForm::new();
        assert_eq!(submit_with(&mut form, "abc"), INVALID_NUMBER);
    }

    #[test]
    fn test_invalid_input_replaces_previous_result() {
        let mut form = ConverterForm::new();
        submit_with(&mut form, "2");
        assert_eq!(submit_with(&mut form, "two"), INVALID_NUMBER);
    }

    #[test]
    fn test_select_category_resets_units() {
        let mut form = ConverterForm::new();
        form.select_category("Weight").unwrap();
        assert_eq!(form.category(), UnitCategory::Weight);
        assert_eq!(form.from_unit(), "grams");
        assert_eq!(form.to_unit(), "kilograms");
        assert_eq!(form.units(), &["grams", "kilograms", "pounds", "ounces"]);

        form.select_category("Temperature").unwrap();
        assert_eq!(form.from_unit(), "Celsius");
        assert_eq!(form.to_unit(), "Fahrenheit");

        form.select_category("Length").unwrap();
        assert_eq!(form.from_unit(), "millimeters");
        assert_eq!(form.to_unit(), "centimeters");
    }

    #[test]
    fn test_select_unknown_category() {
        let mut form = ConverterForm::new();
        let err = form.select_category("Volume").unwrap_err();
        assert_eq!(err, ConversionError::unknown_category("Volume"));
        // Selection is untouched
        assert_eq!(form.category(), UnitCategory::Length);
        assert_eq!(form.from_unit(), "meters");
    }

    #[test]
    fn test_select_units() {
        let mut form = ConverterForm::new();
        form.select_category("Temperature").unwrap();
        form.select_from("Kelvin").unwrap();
        form.select_to("Celsius").unwrap();
        assert_eq!(submit_with(&mut form, "273.15"), "0.0000 Celsius");
    }

    #[test]
    fn test_select_unit_outside_category() {
        let mut form = ConverterForm::new();
        let err = form.select_to("pounds").unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit(UnitCategory::Length, "pounds"));
        assert_eq!(form.to_unit(), "feet");
    }

    #[test]
    fn test_weight_conversion() {
        let mut form = ConverterForm::new();
        form.select_category("Weight").unwrap();
        form.select_from("kilograms").unwrap();
        form.select_to("pounds").unwrap();
        assert_eq!(submit_with(&mut form, "1"), "2.2046 pounds");
    }

    #[test]
    fn test_exact_tie_rounds_up() {
        let mut form = ConverterForm::new();
        form.select_category("Weight").unwrap();
        form.select_from("grams").unwrap();
        form.select_to("kilograms").unwrap();
        assert_eq!(submit_with(&mut form, "31.25"), "0.0313 kilograms");
    }

    #[test]
    fn test_result_keeps_unit_from_submit() {
        let mut form = ConverterForm::new();
        submit_with(&mut form, "1");
        form.select_to("inches").unwrap();
        assert_eq!(form.result(), Some("3.2808 feet"));
    }

    #[test]
    fn test_temperature_conversion() {
        let mut form = ConverterForm::new();
        form.select_category("Temperature").unwrap();
        assert_eq!(submit_with(&mut form, "100"), "212.0000 Fahrenheit");
    }

    #[test]
    fn test_overflow_renders_infinity() {
        let mut form = ConverterForm::new();
        form.select_from("kilometers").unwrap();
        form.select_to("millimeters").unwrap();
        assert_eq!(submit_with(&mut form, "1e305"), "Infinity millimeters");
    }

    #[test]
    fn test_serialize_snapshot() {
        let mut form = ConverterForm::new();
        submit_with(&mut form, "10");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["category"], "Length");
        assert_eq!(json["from_unit"], "meters");
        assert_eq!(json["to_unit"], "feet");
        assert_eq!(json["input"], "10");
        assert_eq!(json["result"], "32.8084 feet");
    }
}
