//! Placeholder templates and free-text field parsers for building
//! genealogical filenames.
//!
//! Raw date, name, and place text is parsed into typed slots, then rendered
//! through templates such as `{SURNAME:upper}.{GIVEN}` or `{YYYY}.{MM}.{DD}`.
//!
//! ```
//! use gedname::{process_date_subtemplate, process_place_subtemplate};
//!
//! assert_eq!(process_date_subtemplate("Abt 1850", None), "1850.x.x");
//! assert_eq!(process_place_subtemplate("London, England", Some("{C}-{CI}")), "England-London");
//! ```

pub mod domain;
pub mod formatter;
pub mod interpreter;
pub mod parser;
pub mod people;
pub mod sanitize;
pub mod settings;
pub mod subtemplate;
pub mod types;

pub use formatter::Formatter;
pub use interpreter::{Diagnostic, EvalContext, KeyMap};
pub use people::format_additional_people;
pub use sanitize::sanitize_for_filename;
pub use settings::{Settings, SettingsError};
pub use subtemplate::{
    process_date_subtemplate, process_name_subtemplate, process_place_subtemplate,
};
pub use types::{FieldRecord, FieldValue, Person};

// Re-exported for the CLI and for callers building custom key maps.
pub use gedname_semantics::Domain;

/// Creates a [`FieldRecord`] from key-value pairs.
///
/// Values are converted via `Into<FieldValue>`, so strings, integers, and
/// `Option`s can be passed directly. `None` and `""` are both absent.
///
/// # Example
///
/// ```
/// use gedname::{FieldValue, fields};
///
/// let record = fields! { "year" => 1850, "month" => None::<&str> };
/// assert_eq!(record.get("year"), &FieldValue::Number(1850));
/// assert!(record.get("month").is_absent());
/// assert!(record.get("day").is_absent());
/// ```
#[macro_export]
macro_rules! fields {
    {} => {
        $crate::FieldRecord::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut record = $crate::FieldRecord::new();
            $(
                record.insert($key, ::std::convert::Into::<$crate::FieldValue>::into($value));
            )+
            record
        }
    };
}
