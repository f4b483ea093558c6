//! Numeric formatting for the display.

/// Magnitude at which results switch to scientific notation.
const SCI_THRESHOLD: f64 = 1e7;

/// Format a result for display: scientific notation with six fractional
/// digits for large magnitudes, no trailing `.0` for whole numbers, the
/// shortest round-trip form otherwise.
pub fn format_number(value: f64) -> String {
    if value.abs() >= SCI_THRESHOLD {
        format!("{:.6e}", value)
    } else if value % 1.0 == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Round to `places` decimal digits to hide binary floating-point noise.
pub fn round_to_decimals(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
