//! Float rounding and string conversion.

/// Round `value` to `precision` decimal places, halves away from zero.
pub fn round_float(value: f64, precision: i32) -> f64 {
    let ratio = 10f64.powi(precision);
    (value * ratio).round() / ratio
}

/// Parse `text` as an `f64`, returning `0.0` when it is not a number.
///
/// `"NaN"` also yields `0.0`. Infinities parse as-is.
pub fn string_to_float(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        Ok(_) => 0.0,
        Err(e) => {
            tracing::debug!("Not a float {text:?}: {e}");
            0.0
        }
    }
}

/// Format `value` with exactly eight decimal places.
pub fn float_to_string(value: f64) -> String {
    format!("{value:.8}")
}
