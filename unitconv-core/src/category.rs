//! Unit categories
//!
//! Every unit belongs to exactly one category. Two units can only be
//! converted between each other when their categories match.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The closed set of unit categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Base unit: meter
    Length,
    /// Base unit: gram
    Weight,
    /// Affine scales, no common multiplier
    Temperature,
    /// Sentinel for tokens that match no known unit
    Unrecognized,
}

impl UnitCategory {
    /// Categories that convert by a plain multiplier
    pub fn is_linear(&self) -> bool {
        matches!(self, UnitCategory::Length | UnitCategory::Weight)
    }

    /// Categories whose magnitudes cannot physically be negative
    pub fn rejects_negative(&self) -> bool {
        self.is_linear()
    }

    /// Display label used in user-facing sentences
    pub fn label(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Unrecognized => "NaU",
        }
    }

    /// All real categories, in catalog order
    pub const REAL: [UnitCategory; 3] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
    ];
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
