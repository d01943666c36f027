//! Unit representation with conversion multipliers

use std::fmt;
use serde::Serialize;
use unitconv_core::UnitCategory;

/// Identity of every unit the catalog knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitId {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Kelvin,
    Fahrenheit,
    Celsius,
    Unrecognized,
}

/// An immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDefinition {
    pub id: UnitId,
    /// Canonical short code (e.g., "km", "lb")
    pub code: &'static str,
    /// Display name used when the value is exactly one
    pub singular: &'static str,
    /// Display name used for every other value
    pub plural: &'static str,
    /// Size in the category's base unit (meter, gram). Zero for temperatures.
    pub multiplier: f64,
    pub category: UnitCategory,
}

impl UnitDefinition {
    /// Create a unit that converts by multiplier
    pub const fn linear(
        id: UnitId,
        code: &'static str,
        singular: &'static str,
        plural: &'static str,
        multiplier: f64,
        category: UnitCategory,
    ) -> Self {
        UnitDefinition { id, code, singular, plural, multiplier, category }
    }

    /// Create a temperature scale (no meaningful multiplier)
    pub const fn temperature(
        id: UnitId,
        code: &'static str,
        singular: &'static str,
        plural: &'static str,
    ) -> Self {
        UnitDefinition {
            id,
            code,
            singular,
            plural,
            multiplier: 0.0,
            category: UnitCategory::Temperature,
        }
    }

    /// The sentinel returned for tokens that match nothing
    pub const UNRECOGNIZED: UnitDefinition = UnitDefinition {
        id: UnitId::Unrecognized,
        code: "???",
        singular: "???",
        plural: "???",
        multiplier: 0.0,
        category: UnitCategory::Unrecognized,
    };

    pub fn is_recognized(&self) -> bool {
        self.category != UnitCategory::Unrecognized
    }

    /// Check if two units share a category (can be converted)
    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.category == other.category
    }

    /// Singular name for exactly 1.0, plural otherwise (-1.0 is plural)
    pub fn pluralize(&self, value: f64) -> &'static str {
        if value == 1.0 {
            self.singular
        } else {
            self.plural
        }
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Format helper matching `UnitDefinition::pluralize`
pub fn pluralize(definition: &UnitDefinition, value: f64) -> &'static str {
    definition.pluralize(value)
}
