use std::collections::HashMap;

use super::FieldValue;

/// Field values keyed by lowercase field key (`year`, `surname`, `city`...).
///
/// A record is built fresh for each formatting call. Keys that were never
/// inserted read as [`FieldValue::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRecord {
    fields: HashMap<String, FieldValue>,
}

impl FieldRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`FieldRecord::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a field value. Missing keys are absent.
    pub fn get(&self, key: &str) -> &FieldValue {
        const ABSENT: &FieldValue = &FieldValue::Absent;
        self.fields.get(key).unwrap_or(ABSENT)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FieldRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
