//! unitconv - Natural-language unit conversion
//!
//! Turns lines like "10 km to miles" into sentences like
//! "10.0 kilometers is 6.2136... miles".

mod config;
mod listing;
mod render;
mod session;

pub use config::{SessionConfig, DEFAULT_PROMPT, DEFAULT_EXIT_WORD};
pub use listing::{list_catalog, render_listing, CategoryListing, UnitListing};
pub use render::Reply;
pub use session::{Session, SessionError, SessionSummary};

use tracing::warn;
use unitconv_units::{convert_with, parse_request, Catalog, CATALOG};

/// Main conversion engine: one request line in, one reply out
pub struct Converter {
    catalog: &'static Catalog,
}

impl Converter {
    pub fn new() -> Self {
        Self { catalog: &CATALOG }
    }

    /// Parse, resolve, validate and convert a single request line
    pub fn evaluate(&self, line: &str) -> Reply {
        let request = match parse_request(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(code = e.code(), error = %e, "parse error");
                return Reply::ParseError(e);
            }
        };

        let from = self.catalog.lookup(&request.from);
        let to = self.catalog.lookup(&request.to);

        // Same category covers "both unrecognized", which is still impossible
        if !from.is_compatible(to) || !from.is_recognized() {
            warn!(from = %request.from, to = %request.to, "impossible conversion");
            return Reply::Impossible { from, to };
        }

        if request.value < 0.0 && from.category.rejects_negative() {
            warn!(value = request.value, category = %from.category, "negative magnitude");
            return Reply::Negative(from.category);
        }

        Reply::Converted {
            input: request.value,
            conversion: convert_with(request.value, from, to),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
