//! Reply renderer
//!
//! Every processed request produces exactly one reply line.

use std::fmt;
use unitconv_core::{format_number, ParseError, UnitCategory};
use unitconv_units::{ConversionResult, UnitDefinition};

/// Outcome of one request line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// `<value> <unit> is <result> <unit>`
    Converted {
        input: f64,
        conversion: ConversionResult<'static>,
    },
    /// Units of different categories, or neither unit recognized
    Impossible {
        from: &'static UnitDefinition,
        to: &'static UnitDefinition,
    },
    /// Negative magnitude for a category that cannot be negative
    Negative(UnitCategory),
    /// The line could not be parsed
    ParseError(ParseError),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Converted { input, conversion } => write!(
                f,
                "{} {} is {} {}",
                format_number(*input),
                conversion.from.pluralize(*input),
                format_number(conversion.value),
                conversion.to.pluralize(conversion.value),
            ),
            Reply::Impossible { from, to } => {
                write!(f, "Conversion from {} to {} is impossible", from.plural, to.plural)
            }
            Reply::Negative(category) => write!(f, "{} shouldn't be negative.", category),
            Reply::ParseError(_) => write!(f, "Parse error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_units::{convert_with, UnitId, CATALOG};

    fn converted(input: f64, from: UnitId, to: UnitId) -> Reply {
        Reply::Converted {
            input,
            conversion: convert_with(input, CATALOG.get(from), CATALOG.get(to)),
        }
    }

    #[test]
    fn test_render_conversion() {
        let reply = converted(1.0, UnitId::Kilometer, UnitId::Meter);
        assert_eq!(reply.to_string(), "1.0 kilometer is 1000.0 meters");
    }

    #[test]
    fn test_render_singular_result() {
        let reply = converted(1000.0, UnitId::Gram, UnitId::Kilogram);
        assert_eq!(reply.to_string(), "1000.0 grams is 1.0 kilogram");
    }

    #[test]
    fn test_render_negative_one_is_plural() {
        let reply = converted(-1.0, UnitId::Celsius, UnitId::Celsius);
        assert_eq!(reply.to_string(), "-1.0 degrees Celsius is -1.0 degrees Celsius");
    }

    #[test]
    fn test_render_impossible() {
        let reply = Reply::Impossible {
            from: CATALOG.get(UnitId::Pound),
            to: CATALOG.get(UnitId::Kelvin),
        };
        assert_eq!(reply.to_string(), "Conversion from pounds to kelvins is impossible");
    }

    #[test]
    fn test_render_negative() {
        assert_eq!(Reply::Negative(UnitCategory::Weight).to_string(), "Weight shouldn't be negative.");
        assert_eq!(Reply::Negative(UnitCategory::Length).to_string(), "Length shouldn't be negative.");
    }

    #[test]
    fn test_render_parse_error() {
        let reply = Reply::ParseError(ParseError::UnresolvedConnector);
        assert_eq!(reply.to_string(), "Parse error");
    }
}
