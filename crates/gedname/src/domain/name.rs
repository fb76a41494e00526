//! Personal name parsing.

use super::{sentinel, slot};
use crate::types::FieldRecord;

/// Given, middle, and surname slots of a parsed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameComponents {
    pub given: String,
    pub middle: String,
    pub surname: String,
}

impl Default for NameComponents {
    fn default() -> Self {
        NameComponents {
            given: sentinel(),
            middle: sentinel(),
            surname: sentinel(),
        }
    }
}

impl NameComponents {
    /// Field record keyed `given`/`middle`/`surname`, sentinels mapped to
    /// absent.
    pub fn into_record(self) -> FieldRecord {
        FieldRecord::new()
            .with("given", slot(self.given))
            .with("middle", slot(self.middle))
            .with("surname", slot(self.surname))
    }
}

/// Parse a name written in given-first order.
///
/// Tokens are separated by runs of whitespace. The first token is the given
/// name and the last the surname; with more than three tokens every interior
/// token joins the middle name. Hyphenated parts such as `Smith-Jones` are
/// single tokens.
///
/// # Example
///
/// ```
/// use gedname::domain::parse_name_input;
///
/// let name = parse_name_input("Mary Ann Louise Smith");
/// assert_eq!(name.given, "Mary");
/// assert_eq!(name.middle, "Ann Louise");
/// assert_eq!(name.surname, "Smith");
/// ```
pub fn parse_name_input(input: &str) -> NameComponents {
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [] => NameComponents::default(),
        [given] => NameComponents {
            given: (*given).to_string(),
            ..NameComponents::default()
        },
        [given, surname] => NameComponents {
            given: (*given).to_string(),
            middle: sentinel(),
            surname: (*surname).to_string(),
        },
        [given, middle @ .., surname] => NameComponents {
            given: (*given).to_string(),
            middle: middle.join(" "),
            surname: (*surname).to_string(),
        },
    }
}
