//! Result renderer
//!
//! Renders converted values the way the form displays them.

/// Fixed number of decimal places in a rendered result
pub const DECIMAL_PLACES: usize = 4;

/// Shown instead of a result when the input is not a number
pub const INVALID_NUMBER: &str = "Please enter a valid number";

/// Every finite f64 has an exact decimal expansion within this many places
const EXACT_PLACES: usize = 1074;

/// Result renderer
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a number with exactly [`DECIMAL_PLACES`] decimals
    pub fn render_number(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }
        to_fixed(value)
    }

    /// Render a converted value followed by its unit.
    ///
    /// The unit is left off when the rendered value is not a number.
    pub fn render_result(&self, value: f64, unit: &str) -> String {
        let number = self.render_number(value);
        if value.is_nan() {
            number
        } else {
            format!("{} {}", number, unit)
        }
    }

    /// Render the result line shown under the form
    pub fn render_display(&self, result: &str) -> String {
        format!("Result: {}", result)
    }
}

/// Fixed-point rendering rounding half away from zero.
///
/// Rounds on the exact decimal expansion, so binary ties such as 0.03125
/// go up instead of to even. Negative zero has no sign.
fn to_fixed(value: f64) -> String {
    let exact = format!("{:.*}", EXACT_PLACES, value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().take(DECIMAL_PLACES))
        .map(|b| b - b'0')
        .collect();
    if frac.as_bytes().get(DECIMAL_PLACES).is_some_and(|d| *d >= b'5') {
        increment(&mut digits);
    }

    let split = digits.len() - DECIMAL_PLACES;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, render(&digits[..split]), render(&digits[split..]))
}

/// Add one in the last place, carrying through nines
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
