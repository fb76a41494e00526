//! Formatting for the list of additional people on a record.

use crate::interpreter::EvalContext;
use crate::sanitize::sanitize_for_filename;
use crate::subtemplate::render_name;
use crate::types::Person;

/// Template used when none is configured: given name, surname, joined by `+`.
pub const DEFAULT_PEOPLE_TEMPLATE: &str = "{GIVEN}.{SURNAME}|+";

/// Split a people template at its last `|` into `(name template, delimiter)`.
///
/// Without a `|` the whole string is the name template and the delimiter is
/// empty.
///
/// # Example
///
/// ```
/// use gedname::people::split_delimiter;
///
/// assert_eq!(split_delimiter("{GIVEN}|a|b"), ("{GIVEN}|a", "b"));
/// assert_eq!(split_delimiter("{GIVEN}"), ("{GIVEN}", ""));
/// ```
pub fn split_delimiter(template: &str) -> (&str, &str) {
    match template.rfind('|') {
        Some(pos) => (&template[..pos], &template[pos + 1..]),
        None => (template, ""),
    }
}

/// Render every person through the name sub-template and join the results.
///
/// Each person's non-blank name parts are joined with spaces, rendered with
/// the name template, then sanitized for filenames. The delimiter itself is
/// not sanitized, so a template with spaces and a `", "` delimiter yields
/// `Jane-DOE, Robert-SMITH`.
///
/// # Example
///
/// ```
/// use gedname::{Person, format_additional_people};
///
/// let people = [
///     Person::new("Jane", "Doe"),
///     Person::new("Robert", "Smith").with_middle("James"),
/// ];
/// let out = format_additional_people(&people, "{SURNAME:upper}.{GIVEN}|+");
/// assert_eq!(out, "DOE.Jane+SMITH.Robert");
/// ```
pub fn format_additional_people(people: &[Person], template: &str) -> String {
    format_people_with(people, template, &mut EvalContext::new())
}

/// [`format_additional_people`] reporting into `ctx`.
pub fn format_people_with(people: &[Person], template: &str, ctx: &mut EvalContext) -> String {
    if people.is_empty() {
        return String::new();
    }

    let (name_template, delimiter) = split_delimiter(template);
    people
        .iter()
        .map(|person| {
            let rendered = render_name(&person.full_name(), Some(name_template), ctx);
            sanitize_for_filename(&rendered)
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}
