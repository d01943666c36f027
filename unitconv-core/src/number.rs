//! Number display
//!
//! Replies print doubles the way the JVM's `Double.toString` does:
//! integral values keep a trailing ".0", and magnitudes outside
//! [1e-3, 1e7) switch to scientific notation with an uppercase `E`.
//! Digits are always the shortest representation that round-trips.

/// Lower bound (inclusive) of the plain decimal range
const PLAIN_MIN: f64 = 1e-3;

/// Upper bound (exclusive) of the plain decimal range
const PLAIN_MAX: f64 = 1e7;

/// Render a double for a user-facing sentence
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        with_fraction(format!("{}", value))
    } else {
        scientific(value)
    }
}

/// Append ".0" to integral renderings
fn with_fraction(mut s: String) -> String {
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Rust renders `1.5e-4`; the JVM renders `1.5E-4` and `1.0E7`
fn scientific(value: f64) -> String {
    let raw = format!("{:e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}E{}", with_fraction(mantissa.to_string()), exponent)
        }
        None => with_fraction(raw),
    }
}
