//! Genealogical date parsing.

use winnow::ascii::multispace0;
use winnow::combinator::{alt, eof, opt, preceded, terminated};
use winnow::prelude::*;
use winnow::token::take_while;

use super::{sentinel, slot};
use crate::types::FieldRecord;

/// Year, month, and day slots of a parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateComponents {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl Default for DateComponents {
    fn default() -> Self {
        DateComponents {
            year: sentinel(),
            month: sentinel(),
            day: sentinel(),
        }
    }
}

impl DateComponents {
    fn new(year: &str, month: Option<&str>, day: Option<&str>) -> Self {
        DateComponents {
            year: year.to_string(),
            month: month.map_or_else(sentinel, str::to_string),
            day: day.map_or_else(sentinel, str::to_string),
        }
    }

    /// Field record keyed `year`/`month`/`day`, sentinels mapped to absent.
    pub fn into_record(self) -> FieldRecord {
        FieldRecord::new()
            .with("year", slot(self.year))
            .with("month", slot(self.month))
            .with("day", slot(self.day))
    }
}

/// Parse a free-text date.
///
/// Forms are tried in order:
/// 1. `YYYY-MM-DD`
/// 2. `YYYY` or `YYYY-MM`
/// 3. An optional `Abt`/`Bef`/`Aft` qualifier, a 4-digit year, then optional
///    `-MM` and `-DD`, anywhere in the text. The qualifier is discarded.
/// 4. Any standalone 4-digit run as the year.
///
/// Month and day ranges are not validated.
///
/// # Example
///
/// ```
/// use gedname::domain::parse_date_input;
///
/// let date = parse_date_input("Abt 1850-06");
/// assert_eq!((date.year.as_str(), date.month.as_str(), date.day.as_str()), ("1850", "06", "x"));
/// ```
pub fn parse_date_input(input: &str) -> DateComponents {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DateComponents::default();
    }

    if let Ok(date) = alt((full_date, partial_date)).parse(trimmed) {
        return date;
    }

    if let Some(date) = find_qualified_date(trimmed) {
        return date;
    }

    standalone_year(trimmed)
        .map(|year| DateComponents::new(year, None, None))
        .unwrap_or_default()
}

/// `YYYY-MM-DD` spanning the whole input.
fn full_date(input: &mut &str) -> ModalResult<DateComponents> {
    terminated((year, two_digit_part, two_digit_part), eof)
        .map(|(year, month, day)| DateComponents::new(year, Some(month), Some(day)))
        .parse_next(input)
}

/// `YYYY` or `YYYY-MM` spanning the whole input.
fn partial_date(input: &mut &str) -> ModalResult<DateComponents> {
    terminated((year, opt(two_digit_part)), eof)
        .map(|(year, month)| DateComponents::new(year, month, None))
        .parse_next(input)
}

/// Qualifier, year, and optional month/day, starting at the current position.
fn qualified_date(input: &mut &str) -> ModalResult<DateComponents> {
    (
        opt(qualifier),
        multispace0,
        year,
        opt((two_digit_part, opt(two_digit_part))),
    )
        .map(|(_, _, year, rest)| match rest {
            Some((month, day)) => DateComponents::new(year, Some(month), day),
            None => DateComponents::new(year, None, None),
        })
        .parse_next(input)
}

/// Leftmost position where [`qualified_date`] matches.
fn find_qualified_date(input: &str) -> Option<DateComponents> {
    input.char_indices().find_map(|(start, _)| {
        let mut remaining = &input[start..];
        qualified_date(&mut remaining).ok()
    })
}

fn qualifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt(("Abt", "Bef", "Aft")).parse_next(input)
}

fn year<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(4, |c: char| c.is_ascii_digit()).parse_next(input)
}

/// `-NN`, returning the two digits.
fn two_digit_part<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded('-', take_while(2, |c: char| c.is_ascii_digit())).parse_next(input)
}

/// A run of exactly four digits bounded by non-word characters or the ends
/// of the input.
fn standalone_year(input: &str) -> Option<&str> {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    input
        .split(|c: char| !is_word(c))
        .find(|word| word.len() == 4 && word.bytes().all(|b| b.is_ascii_digit()))
}
