//! Settings-aware entry point tying the orchestrators together.

use crate::domain::CountrySet;
use crate::interpreter::{Diagnostic, EvalContext, KeyMap, process_sub_template};
use crate::people::{DEFAULT_PEOPLE_TEMPLATE, format_people_with};
use crate::settings::Settings;
use crate::subtemplate::{render_date, render_name, render_place};
use crate::types::{FieldRecord, Person};

/// Formats fields using configured templates and collects diagnostics.
///
/// Template resolution for each call: the explicit template if non-empty,
/// then the template from [`Settings`], then the built-in default.
///
/// # Example
///
/// ```
/// use gedname::{Formatter, Settings};
///
/// let settings = Settings::builder().name_template("{GIVEN} {SURNAME:upper}".to_string()).build();
/// let mut formatter = Formatter::new(settings);
///
/// assert_eq!(formatter.name("John Smith", None), "John SMITH");
/// assert_eq!(formatter.name("John Smith", Some("{SURNAME}")), "Smith");
///
/// formatter.date("1850", Some("{YEAR}"));
/// assert_eq!(formatter.warnings().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    settings: Settings,
    countries: CountrySet,
    ctx: EvalContext,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(Settings::default())
    }
}

impl Formatter {
    /// Create a formatter from settings.
    pub fn new(settings: Settings) -> Self {
        let countries = settings.countries();
        let ctx = EvalContext::with_missing_value(settings.missing_value());
        Self {
            settings,
            countries,
            ctx,
        }
    }

    /// The settings this formatter was built from.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Render a date field.
    pub fn date(&mut self, raw: &str, template: Option<&str>) -> String {
        let template = pick(template, self.settings.date_template.as_deref());
        render_date(raw, template, &mut self.ctx)
    }

    /// Render a name field.
    pub fn name(&mut self, raw: &str, template: Option<&str>) -> String {
        let template = pick(template, self.settings.name_template.as_deref());
        render_name(raw, template, &mut self.ctx)
    }

    /// Render a place field.
    pub fn place(&mut self, raw: &str, template: Option<&str>) -> String {
        let template = pick(template, self.settings.place_template.as_deref());
        render_place(raw, template, &self.countries, &mut self.ctx)
    }

    /// Render the additional-people list.
    pub fn additional_people(&mut self, people: &[Person], template: Option<&str>) -> String {
        let template = pick(
            template,
            self.settings.additional_people_template.as_deref(),
        )
        .unwrap_or(DEFAULT_PEOPLE_TEMPLATE);
        format_people_with(people, template, &mut self.ctx)
    }

    /// Render an arbitrary template against `record` using every domain's
    /// placeholders.
    pub fn eval(&mut self, template: &str, record: &FieldRecord) -> String {
        process_sub_template(template, record, KeyMap::combined(), &mut self.ctx)
    }

    /// Diagnostics collected so far.
    pub fn warnings(&self) -> &[Diagnostic] {
        self.ctx.warnings()
    }

    /// Drain collected diagnostics.
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        self.ctx.take_warnings()
    }
}

fn pick<'a>(explicit: Option<&'a str>, configured: Option<&'a str>) -> Option<&'a str> {
    explicit
        .filter(|template| !template.is_empty())
        .or(configured)
}
