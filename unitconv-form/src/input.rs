//! Raw input validation

/// Parse the raw text typed into the value field.
///
/// Surrounding whitespace is ignored. Empty text, non-numeric text and
/// text naming NaN or infinity yield `None`.
pub fn parse_input(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
