//! User settings: preferred templates and place classification.

use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::CountrySet;
use crate::interpreter::DEFAULT_MISSING_VALUE;

/// Errors that occur while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File I/O error when reading the settings file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid settings JSON.
    #[error("invalid settings in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Formatting preferences.
///
/// Every field is optional. Templates left unset fall back to the built-in
/// domain defaults. In JSON, keys are camelCase:
///
/// ```json
/// {
///   "dateTemplate": "{YYYY}-{MM}",
///   "additionalPeopleTemplate": "{SURNAME:upper}|_",
///   "extraCountries": ["Prussia"]
/// }
/// ```
///
/// # Example
///
/// ```
/// use gedname::Settings;
///
/// let settings = Settings::builder()
///     .date_template("{YYYY}".to_string())
///     .extra_countries(vec!["Prussia".to_string()])
///     .build();
/// assert_eq!(settings.missing_value(), "x");
/// assert!(settings.countries().contains("prussia"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Template for the date field.
    pub date_template: Option<String>,

    /// Template for the name field.
    pub name_template: Option<String>,

    /// Template for the place field.
    pub place_template: Option<String>,

    /// Template for additional people, with an optional `|delimiter` suffix.
    pub additional_people_template: Option<String>,

    /// Names added to the built-in country list used for single-segment
    /// places.
    #[builder(default)]
    pub extra_countries: Vec<String>,

    /// Replacement for fields that could not be determined.
    pub missing_value: Option<String>,
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The missing-value handler, `"x"` unless configured.
    pub fn missing_value(&self) -> &str {
        self.missing_value.as_deref().unwrap_or(DEFAULT_MISSING_VALUE)
    }

    /// The built-in country list extended with [`Settings::extra_countries`].
    pub fn countries(&self) -> CountrySet {
        CountrySet::builtin()
            .clone()
            .with_names(&self.extra_countries)
    }
}
