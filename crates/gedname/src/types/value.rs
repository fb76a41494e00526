use std::fmt::{Display, Formatter, Result as FmtResult};

/// A field value handed to the substitution engine.
///
/// Values are either absent, text, or a number. Numbers are rendered through
/// their decimal representation, so `Number(5)` and `Text("5")` format the
/// same way.
///
/// # Example
///
/// ```
/// use gedname::FieldValue;
///
/// let year: FieldValue = 1850.into();
/// assert_eq!(year.as_text().as_deref(), Some("1850"));
///
/// let empty: FieldValue = "".into();
/// assert!(empty.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// No value. Rendered as the missing-value handler.
    #[default]
    Absent,

    /// A text value. The empty string counts as absent.
    Text(String),

    /// An integer value.
    Number(i64),
}

impl FieldValue {
    /// Returns true for `Absent` and for empty text.
    pub fn is_absent(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    /// The value coerced to a string, or `None` if it is absent.
    pub fn as_text(&self) -> Option<String> {
        if self.is_absent() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FieldValue::Absent => Ok(()),
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(i64::from(n))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(i64::from(n))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Absent, Into::into)
    }
}
