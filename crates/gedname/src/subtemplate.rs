//! Sub-template orchestrators for the date, name, and place fields.
//!
//! Each orchestrator parses one raw field, maps the parser's sentinels to
//! absent values, and renders the result with the domain's key map. An empty
//! or missing template falls back to the domain default. Output is not
//! sanitized for filenames.

use gedname_semantics::Domain;

use crate::domain::{CountrySet, parse_date_input, parse_name_input, parse_place_with};
use crate::interpreter::{EvalContext, KeyMap, process_sub_template};
use crate::types::FieldRecord;

/// Render a date field. Default template: `{YYYY}.{MM}.{DD}`.
///
/// # Example
///
/// ```
/// use gedname::process_date_subtemplate;
///
/// assert_eq!(process_date_subtemplate("2024-03-05", Some("{MM}/{DD}/{YY}")), "03/05/24");
/// assert_eq!(process_date_subtemplate("2024-03", None), "2024.03.x");
/// ```
pub fn process_date_subtemplate(raw: &str, template: Option<&str>) -> String {
    render_date(raw, template, &mut EvalContext::new())
}

/// Render a name field. Default template: `{SURNAME:upper}.{GIVEN}`.
///
/// # Example
///
/// ```
/// use gedname::process_name_subtemplate;
///
/// let out = process_name_subtemplate(
///     "John Robert Smith",
///     Some("{SURNAME:upper}.{GIVEN}.{MIDDLE:abbrev}"),
/// );
/// assert_eq!(out, "SMITH.John.R");
/// ```
pub fn process_name_subtemplate(raw: &str, template: Option<&str>) -> String {
    render_name(raw, template, &mut EvalContext::new())
}

/// Render a place field. Default template: `{COUNTRY}.{STATE}.{COUNTY}.{CITY}`.
///
/// # Example
///
/// ```
/// use gedname::process_place_subtemplate;
///
/// let out = process_place_subtemplate("Cleveland, Ohio, USA", Some("{COUNTRY}.{STATE}.{CITY}"));
/// assert_eq!(out, "USA.Ohio.Cleveland");
/// ```
pub fn process_place_subtemplate(raw: &str, template: Option<&str>) -> String {
    render_place(raw, template, CountrySet::builtin(), &mut EvalContext::new())
}

/// [`process_date_subtemplate`] reporting into `ctx`.
pub fn render_date(raw: &str, template: Option<&str>, ctx: &mut EvalContext) -> String {
    render(Domain::Date, template, &parse_date_input(raw).into_record(), ctx)
}

/// [`process_name_subtemplate`] reporting into `ctx`.
pub fn render_name(raw: &str, template: Option<&str>, ctx: &mut EvalContext) -> String {
    render(Domain::Name, template, &parse_name_input(raw).into_record(), ctx)
}

/// [`process_place_subtemplate`] with a custom country list, reporting into
/// `ctx`.
pub fn render_place(
    raw: &str,
    template: Option<&str>,
    countries: &CountrySet,
    ctx: &mut EvalContext,
) -> String {
    let record = parse_place_with(raw, countries).into_record();
    render(Domain::Place, template, &record, ctx)
}

fn render(
    domain: Domain,
    template: Option<&str>,
    record: &FieldRecord,
    ctx: &mut EvalContext,
) -> String {
    let template = template
        .filter(|template| !template.is_empty())
        .unwrap_or(domain.default_template());
    process_sub_template(template, record, KeyMap::for_domain(domain), ctx)
}
