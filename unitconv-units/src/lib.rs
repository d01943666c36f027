//! unitconv Units - Unit catalog, conversion and request parsing
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Weight (g, kg, mg, lb, oz)
//! - Temperature (K, F, C)
//!
//! Unknown unit names never fail: they resolve to an Unrecognized sentinel
//! whose conversions produce NaN.

mod unit;
mod units;
mod convert;
mod parse;

pub use unit::{UnitDefinition, UnitId, pluralize};
pub use units::{Catalog, CATALOG, lookup_unit};
pub use convert::{convert, convert_with, ConversionResult};
pub use parse::{parse_request, find_connector, tokenize, ParsedRequest};
