//! Unit definitions - the fixed catalog of length, weight and temperature units

use std::collections::HashMap;
use std::sync::LazyLock;
use unitconv_core::UnitCategory;
use crate::{UnitDefinition, UnitId};

/// Global unit catalog, built once on first use
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::new);

static UNRECOGNIZED: UnitDefinition = UnitDefinition::UNRECOGNIZED;

/// Registry of all known units and their accepted spellings
pub struct Catalog {
    units: Vec<UnitDefinition>,
    /// Lowercase alias -> index into `units`
    aliases: HashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut catalog = Catalog {
            units: Vec::new(),
            aliases: HashMap::new(),
        };
        catalog.register_length_units();
        catalog.register_weight_units();
        catalog.register_temperature_units();
        catalog
    }

    /// Resolve a unit name, case-insensitively. Unknown names resolve to
    /// the Unrecognized sentinel.
    ///
    /// Parsed requests already arrive single-spaced, but `lookup_unit` is
    /// public and also serves hand-typed phrases such as "degrees  celsius",
    /// so whitespace runs are collapsed here.
    pub fn lookup(&self, token: &str) -> &UnitDefinition {
        let key = token
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        match self.aliases.get(key.as_str()) {
            Some(&index) => &self.units[index],
            None => {
                tracing::debug!(token, "no unit matches");
                &UNRECOGNIZED
            }
        }
    }

    /// Get a unit by identity
    pub fn get(&self, id: UnitId) -> &UnitDefinition {
        self.units
            .iter()
            .find(|u| u.id == id)
            .unwrap_or(&UNRECOGNIZED)
    }

    /// All real units in catalog order (sentinel excluded)
    pub fn definitions(&self) -> &[UnitDefinition] {
        &self.units
    }

    /// Get all units in a category, in catalog order
    pub fn by_category(&self, category: UnitCategory) -> Vec<&UnitDefinition> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// Accepted spellings of one unit, sorted
    pub fn aliases_of(&self, definition: &UnitDefinition) -> Vec<&'static str> {
        let mut aliases: Vec<&'static str> = self.aliases.iter()
            .filter(|&(_, &index)| self.units[index].id == definition.id)
            .map(|(alias, _)| *alias)
            .collect();
        aliases.sort_unstable();
        aliases
    }

    fn register(&mut self, unit: UnitDefinition, aliases: &[&'static str]) {
        let index = self.units.len();
        self.units.push(unit);
        for alias in aliases {
            self.aliases.insert(*alias, index);
        }
    }

    fn register_length_units(&mut self) {
        use UnitCategory::Length;

        self.register(UnitDefinition::linear(UnitId::Meter, "m", "meter", "meters", 1.0, Length),
            &["m", "meter", "meters"]);
        self.register(UnitDefinition::linear(UnitId::Kilometer, "km", "kilometer", "kilometers", 1000.0, Length),
            &["km", "kilometer", "kilometers"]);
        self.register(UnitDefinition::linear(UnitId::Centimeter, "cm", "centimeter", "centimeters", 0.01, Length),
            &["cm", "centimeter", "centimeters"]);
        self.register(UnitDefinition::linear(UnitId::Millimeter, "mm", "millimeter", "millimeters", 0.001, Length),
            &["mm", "millimeter", "millimeters"]);
        self.register(UnitDefinition::linear(UnitId::Mile, "mi", "mile", "miles", 1609.35, Length),
            &["mi", "mile", "miles"]);
        self.register(UnitDefinition::linear(UnitId::Yard, "yd", "yard", "yards", 0.9144, Length),
            &["yd", "yard", "yards"]);
        self.register(UnitDefinition::linear(UnitId::Foot, "ft", "foot", "feet", 0.3048, Length),
            &["ft", "foot", "feet"]);
        self.register(UnitDefinition::linear(UnitId::Inch, "in", "inch", "inches", 0.0254, Length),
            &["in", "inch", "inches"]);
    }

    fn register_weight_units(&mut self) {
        use UnitCategory::Weight;

        self.register(UnitDefinition::linear(UnitId::Gram, "g", "gram", "grams", 1.0, Weight),
            &["g", "gram", "grams"]);
        self.register(UnitDefinition::linear(UnitId::Kilogram, "kg", "kilogram", "kilograms", 1000.0, Weight),
            &["kg", "kilogram", "kilograms"]);
        self.register(UnitDefinition::linear(UnitId::Milligram, "mg", "milligram", "milligrams", 0.001, Weight),
            &["mg", "milligram", "milligrams"]);
        self.register(UnitDefinition::linear(UnitId::Pound, "lb", "pound", "pounds", 453.592, Weight),
            &["lb", "pound", "pounds"]);
        self.register(UnitDefinition::linear(UnitId::Ounce, "oz", "ounce", "ounces", 28.3495, Weight),
            &["oz", "ounce", "ounces"]);
    }

    fn register_temperature_units(&mut self) {
        self.register(UnitDefinition::temperature(UnitId::Kelvin, "k", "kelvin", "kelvins"),
            &["k", "kelvin", "kelvins"]);
        self.register(UnitDefinition::temperature(UnitId::Fahrenheit, "f", "degree Fahrenheit", "degrees Fahrenheit"),
            &["f", "df", "fahrenheit", "degree fahrenheit", "degrees fahrenheit"]);
        self.register(UnitDefinition::temperature(UnitId::Celsius, "c", "degree Celsius", "degrees Celsius"),
            &["c", "dc", "celsius", "degree celsius", "degrees celsius"]);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a unit name against the global catalog
pub fn lookup_unit(token: &str) -> &'static UnitDefinition {
    CATALOG.lookup(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let kg = lookup_unit("kg");
        assert_eq!(kg.id, UnitId::Kilogram);
        assert!(std::ptr::eq(kg, lookup_unit("kilogram")));
        assert!(std::ptr::eq(kg, lookup_unit("KILOGRAMS")));
    }

    #[test]
    fn test_lookup_temperature_phrases() {
        for token in ["c", "dc", "celsius", "degree celsius", "degrees celsius", "Degrees Celsius"] {
            assert_eq!(lookup_unit(token).id, UnitId::Celsius, "token: {}", token);
        }
        for token in ["f", "df", "fahrenheit", "degree fahrenheit", "degrees fahrenheit"] {
            assert_eq!(lookup_unit(token).id, UnitId::Fahrenheit, "token: {}", token);
        }
        assert_eq!(lookup_unit("k").id, UnitId::Kelvin);
        assert_eq!(lookup_unit("kelvins").id, UnitId::Kelvin);
    }

    #[test]
    fn test_lookup_collapses_inner_whitespace() {
        assert_eq!(lookup_unit("degrees   celsius").id, UnitId::Celsius);
    }

    #[test]
    fn test_unknown_unit_is_sentinel() {
        let unit = lookup_unit("banana");
        assert_eq!(unit.id, UnitId::Unrecognized);
        assert_eq!(unit.category, UnitCategory::Unrecognized);
        assert!(!unit.is_recognized());
    }

    #[test]
    fn test_degrees_kelvin_is_not_an_alias() {
        assert_eq!(lookup_unit("degrees kelvin").id, UnitId::Unrecognized);
    }

    #[test]
    fn test_ambiguous_codes() {
        // "m" is meter, not mile; "k" is kelvin, not kilometer
        assert_eq!(lookup_unit("m").id, UnitId::Meter);
        assert_eq!(lookup_unit("mi").id, UnitId::Mile);
        assert_eq!(lookup_unit("k").id, UnitId::Kelvin);
        assert_eq!(lookup_unit("in").id, UnitId::Inch);
    }

    #[test]
    fn test_by_category() {
        let lengths = CATALOG.by_category(UnitCategory::Length);
        assert_eq!(lengths.len(), 8);
        assert_eq!(lengths[0].id, UnitId::Meter);

        assert_eq!(CATALOG.by_category(UnitCategory::Weight).len(), 5);
        assert_eq!(CATALOG.by_category(UnitCategory::Temperature).len(), 3);
        assert!(CATALOG.by_category(UnitCategory::Unrecognized).is_empty());
    }

    #[test]
    fn test_every_unit_has_one_category() {
        let total: usize = UnitCategory::REAL.iter()
            .map(|c| CATALOG.by_category(*c).len())
            .sum();
        assert_eq!(total, CATALOG.definitions().len());
    }

    #[test]
    fn test_aliases_of() {
        let celsius = CATALOG.get(UnitId::Celsius);
        let aliases = CATALOG.aliases_of(celsius);
        assert_eq!(aliases, vec!["c", "celsius", "dc", "degree celsius", "degrees celsius"]);
    }

    #[test]
    fn test_every_alias_resolves_to_its_unit() {
        for unit in CATALOG.definitions() {
            for alias in CATALOG.aliases_of(unit) {
                assert_eq!(lookup_unit(alias).id, unit.id, "alias: {}", alias);
            }
        }
    }

    #[test]
    fn test_get_sentinel() {
        assert_eq!(CATALOG.get(UnitId::Unrecognized).plural, "???");
    }
}
