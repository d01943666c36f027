//! Catalog listing - what the converter understands, grouped by category

use serde::Serialize;
use unitconv_core::UnitCategory;
use unitconv_units::{Catalog, UnitDefinition};

/// One unit with every spelling the parser accepts
#[derive(Debug, Clone, Serialize)]
pub struct UnitListing {
    #[serde(flatten)]
    pub definition: &'static UnitDefinition,
    pub aliases: Vec<&'static str>,
}

/// All units of one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub category: UnitCategory,
    pub units: Vec<UnitListing>,
}

/// Build the listing for every real category, in catalog order
pub fn list_catalog(catalog: &'static Catalog) -> Vec<CategoryListing> {
    UnitCategory::REAL
        .iter()
        .map(|&category| CategoryListing {
            category,
            units: catalog
                .by_category(category)
                .into_iter()
                .map(|definition| UnitListing {
                    definition,
                    aliases: catalog.aliases_of(definition),
                })
                .collect(),
        })
        .collect()
}

/// Plain-text rendering for the terminal
pub fn render_listing(listing: &[CategoryListing]) -> String {
    let mut output = String::new();

    for group in listing {
        output.push_str(&format!("{}:\n", group.category));
        for unit in &group.units {
            output.push_str(&format!(
                "  {:<4} {:<20} {}\n",
                unit.definition.code,
                unit.definition.plural,
                unit.aliases.join(", ")
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_units::CATALOG;

    #[test]
    fn test_listing_groups() {
        let listing = list_catalog(&CATALOG);
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].category, UnitCategory::Length);
        assert_eq!(listing[0].units.len(), 8);
        assert_eq!(listing[1].units.len(), 5);
        assert_eq!(listing[2].units.len(), 3);
    }

    #[test]
    fn test_render_listing() {
        let text = render_listing(&list_catalog(&CATALOG));
        assert!(text.starts_with("Length:\n"));
        assert!(text.contains("Weight:\n"));
        assert!(text.contains("Temperature:\n"));
        assert!(text.contains("degrees celsius"));
        assert!(!text.contains("???"));
    }

    #[test]
    fn test_listing_json_shape() {
        let json = serde_json::to_value(list_catalog(&CATALOG)).unwrap();
        let first = &json[0]["units"][0];
        assert_eq!(json[0]["category"], "length");
        assert_eq!(first["code"], "m");
        assert_eq!(first["aliases"], serde_json::json!(["m", "meter", "meters"]));
    }
}
