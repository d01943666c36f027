//! Conversion engine
//!
//! Dispatch is by the source unit's category. Linear categories scale by
//! multiplier; temperatures use a hand-enumerated formula per
//! (source, destination) pair. Anything not computable yields NaN.

use unitconv_core::UnitCategory;
use crate::UnitDefinition;

/// A computed conversion, ready for formatting
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult<'a> {
    pub value: f64,
    pub from: &'a UnitDefinition,
    pub to: &'a UnitDefinition,
}

/// Convert `value` from one unit to another.
///
/// The caller checks category compatibility first; mixing categories
/// here produces a meaningless number, not an error.
pub fn convert(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> f64 {
    let result = match from.category {
        UnitCategory::Length | UnitCategory::Weight => linear::convert(value, from, to),
        UnitCategory::Temperature => temperature::convert(value, from.id, to.id),
        UnitCategory::Unrecognized => f64::NAN,
    };
    tracing::debug!(value, from = from.code, to = to.code, result, "converted");
    result
}

/// Convert and bundle the result with the units used
pub fn convert_with<'a>(
    value: f64,
    from: &'a UnitDefinition,
    to: &'a UnitDefinition,
) -> ConversionResult<'a> {
    ConversionResult {
        value: convert(value, from, to),
        from,
        to,
    }
}

mod linear {
    use crate::UnitDefinition;

    pub fn convert(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> f64 {
        value * from.multiplier / to.multiplier
    }
}

mod temperature {
    use crate::UnitId;

    pub fn convert(value: f64, from: UnitId, to: UnitId) -> f64 {
        match to {
            UnitId::Kelvin => to_kelvin(value, from),
            UnitId::Celsius => to_celsius(value, from),
            UnitId::Fahrenheit => to_fahrenheit(value, from),
            _ => f64::NAN,
        }
    }

    fn to_kelvin(value: f64, from: UnitId) -> f64 {
        match from {
            UnitId::Celsius => value + 273.15,
            UnitId::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
            UnitId::Kelvin => value,
            _ => f64::NAN,
        }
    }

    fn to_celsius(value: f64, from: UnitId) -> f64 {
        match from {
            UnitId::Kelvin => value - 273.15,
            UnitId::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            UnitId::Celsius => value,
            _ => f64::NAN,
        }
    }

    fn to_fahrenheit(value: f64, from: UnitId) -> f64 {
        match from {
            UnitId::Celsius => value * 9.0 / 5.0 + 32.0,
            UnitId::Kelvin => value * 9.0 / 5.0 - 459.67,
            UnitId::Fahrenheit => value,
            _ => f64::NAN,
        }
    }
}
