//! Form Fields and Values
//!
//! Field tables describing each creation form, the raw string values a form
//! holds, and the parsing/validation that turns them into typed drafts.
//!
//! Validation covers required presence, numeric parsing and the 1-10 range
//! used by every level field.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

/// Inclusive bounds shared by mood, energy, stress and journal mood fields
pub const LEVEL_MIN: i64 = 1;
pub const LEVEL_MAX: i64 = 10;

/// Input widget a field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text area
    TextArea,
    /// Numeric input with the given step ("1", "0.5", "any")
    Number { step: &'static str },
    /// Slider over an inclusive integer range
    Range { min: i64, max: i64 },
    /// Drop-down over fixed option values
    Select(&'static [&'static str]),
    /// Calendar date (YYYY-MM-DD)
    Date,
}

/// One field of a creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in [`FormValues`] and in the JSON body
    pub name: &'static str,
    /// Human label
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Value the field resets to when the form is hidden
    pub default: &'static str,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default: "",
            placeholder: "",
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn default_value(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder,
            ..self
        }
    }
}

/// Validation errors raised before any request is sent
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: String, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: String, value: String },
}

fn display_name(field: &str) -> String {
    field.replace('_', " ")
}

/// Raw string values of a form, keyed by field name
///
/// Missing keys read as blank, the same as an untouched input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values for a freshly reset form
    pub fn with_defaults(fields: &[FieldSpec]) -> Self {
        fields
            .iter()
            .filter(|f| !f.default.is_empty())
            .map(|f| (f.name, f.default))
            .collect()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder form of [`FormValues::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Raw value, blank when unset
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Trimmed text, `None` when blank
    pub fn text(&self, name: &str) -> Option<String> {
        let value = self.get(name).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn required_text(&self, name: &str) -> Result<String, ValidationError> {
        self.text(name).ok_or_else(|| ValidationError::Required {
            field: display_name(name),
        })
    }

    pub fn int(&self, name: &str) -> Result<Option<i64>, ValidationError> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };
        raw.parse::<i64>()
            .map(Some)
            .map_err(|_| ValidationError::NotANumber {
                field: display_name(name),
                value: raw,
            })
    }

    pub fn float(&self, name: &str) -> Result<Option<f64>, ValidationError> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(ValidationError::NotANumber {
                field: display_name(name),
                value: raw,
            }),
        }
    }

    /// Optional integer constrained to 1-10
    pub fn level(&self, name: &str) -> Result<Option<i64>, ValidationError> {
        match self.int(name)? {
            Some(v) if !(LEVEL_MIN..=LEVEL_MAX).contains(&v) => Err(ValidationError::OutOfRange {
                field: display_name(name),
                min: LEVEL_MIN,
                max: LEVEL_MAX,
                value: v,
            }),
            other => Ok(other),
        }
    }

    pub fn required_level(&self, name: &str) -> Result<i64, ValidationError> {
        self.level(name)?.ok_or_else(|| ValidationError::Required {
            field: display_name(name),
        })
    }

    pub fn date(&self, name: &str) -> Result<Option<NaiveDate>, ValidationError> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ValidationError::InvalidDate {
                field: display_name(name),
                value: raw,
            })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
