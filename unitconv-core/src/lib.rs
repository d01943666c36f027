//! unitconv Core - Fundamental types
//!
//! This crate provides the core types used throughout unitconv:
//! - `UnitCategory`: The closed set of unit categories
//! - `ParseError`: Why a request line could not be parsed
//! - `format_number`: JVM-style rendering of doubles for replies

mod category;
mod error;
mod number;

pub use category::UnitCategory;
pub use error::ParseError;
pub use number::format_number;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{UnitCategory, ParseError, format_number};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod category_tests {
        use super::*;

        #[test]
        fn test_linear_categories() {
            assert!(UnitCategory::Length.is_linear());
            assert!(UnitCategory::Weight.is_linear());
            assert!(!UnitCategory::Temperature.is_linear());
            assert!(!UnitCategory::Unrecognized.is_linear());
        }

        #[test]
        fn test_negative_rejection() {
            assert!(UnitCategory::Length.rejects_negative());
            assert!(UnitCategory::Weight.rejects_negative());
            assert!(!UnitCategory::Temperature.rejects_negative());
        }

        #[test]
        fn test_display_labels() {
            assert_eq!(UnitCategory::Length.to_string(), "Length");
            assert_eq!(UnitCategory::Weight.to_string(), "Weight");
            assert_eq!(UnitCategory::Temperature.to_string(), "Temperature");
            assert_eq!(UnitCategory::Unrecognized.to_string(), "NaU");
        }

        #[test]
        fn test_real_excludes_sentinel() {
            assert!(!UnitCategory::REAL.contains(&UnitCategory::Unrecognized));
            assert_eq!(UnitCategory::REAL.len(), 3);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_codes() {
            assert_eq!(ParseError::Empty.code(), "EMPTY");
            assert_eq!(ParseError::MalformedNumber("x".into()).code(), "MALFORMED_NUMBER");
            assert_eq!(ParseError::MissingUnit { position: 1 }.code(), "MISSING_UNIT");
            assert_eq!(ParseError::UnresolvedConnector.code(), "UNRESOLVED_CONNECTOR");
        }

        #[test]
        fn test_error_display() {
            let err = ParseError::MalformedNumber("ten".to_string());
            assert_eq!(format!("{}", err), "Invalid number format: ten");

            let err = ParseError::MissingUnit { position: 3 };
            assert!(format!("{}", err).contains("token 3"));
        }
    }

    mod number_tests {
        use super::*;

        #[test]
        fn test_integral_values_keep_fraction() {
            assert_eq!(format_number(10.0), "10.0");
            assert_eq!(format_number(32.0), "32.0");
            assert_eq!(format_number(-5.0), "-5.0");
            assert_eq!(format_number(1.0), "1.0");
        }

        #[test]
        fn test_zero() {
            assert_eq!(format_number(0.0), "0.0");
            assert_eq!(format_number(-0.0), "-0.0");
        }

        #[test]
        fn test_fractional_values() {
            assert_eq!(format_number(273.15), "273.15");
            assert_eq!(format_number(0.5), "0.5");
            assert_eq!(format_number(0.001), "0.001");
            assert_eq!(format_number(9999999.5), "9999999.5");
        }

        #[test]
        fn test_scientific_large() {
            assert_eq!(format_number(1e7), "1.0E7");
            assert_eq!(format_number(12345678.5), "1.23456785E7");
            assert_eq!(format_number(-2.5e10), "-2.5E10");
        }

        #[test]
        fn test_scientific_small() {
            assert_eq!(format_number(1e-4), "1.0E-4");
            assert_eq!(format_number(2.5e-8), "2.5E-8");
        }

        #[test]
        fn test_non_finite() {
            assert_eq!(format_number(f64::NAN), "NaN");
            assert_eq!(format_number(f64::INFINITY), "Infinity");
            assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        }
    }
}
