use serde::{Deserialize, Serialize};

/// A person listed alongside the primary subject of a record.
///
/// Only the name parts are read by the formatter; any other metadata in the
/// source JSON (relationship, notes...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

impl Person {
    /// Create a person from given name and surname.
    pub fn new(given_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Person {
            given_name: Some(given_name.into()),
            middle_name: None,
            surname: Some(surname.into()),
        }
    }

    /// Set the middle name.
    #[must_use]
    pub fn with_middle(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = Some(middle_name.into());
        self
    }

    /// Non-blank name parts joined by single spaces, in given, middle,
    /// surname order.
    pub fn full_name(&self) -> String {
        [&self.given_name, &self.middle_name, &self.surname]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
