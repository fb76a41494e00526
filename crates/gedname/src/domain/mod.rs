//! Free-text parsers for the date, name, and place fields.
//!
//! Each parser returns a fixed-shape record whose every slot is a string,
//! using [`SENTINEL`] for anything it could not determine. Parsers never fail:
//! empty or unrecognizable input yields an all-sentinel record.

mod date;
mod name;
mod place;

pub use date::{DateComponents, parse_date_input};
pub use name::{NameComponents, parse_name_input};
pub use place::{CountrySet, PlaceComponents, parse_place_input, parse_place_with};

use crate::types::FieldValue;

/// Slot value meaning "could not be determined from input".
pub const SENTINEL: &str = "x";

/// Convert a parsed slot into a field value, mapping the sentinel to absent.
fn slot(value: String) -> FieldValue {
    if value == SENTINEL {
        FieldValue::Absent
    } else {
        FieldValue::Text(value)
    }
}

fn sentinel() -> String {
    SENTINEL.to_string()
}
